//! Octree - a grid of root octs spanning the domain.
//!
//! Roots are stored row-major with z innermost. Each root is walked
//! independently, so [`Octree::par_visit`] hands one root per rayon task
//! and one visitor per root.

use glam::{DVec3, UVec3};
use rayon::prelude::*;

use super::node::OctKey;
use super::oct::{Oct, OctNode};
use super::traversal::{recursively_visit_octs, OctCell, OctVisitor, TraversalStats};
use crate::config::DomainInfo;
use crate::selector::Selector;

#[derive(Clone, Debug)]
pub struct Octree<O = Oct> {
  domain: DomainInfo,
  root_dims: UVec3,
  roots: Vec<O>,
}

impl<O: OctNode> Octree<O> {
  /// Build the root grid, calling `make_root` once per root key in storage
  /// order.
  pub fn new(domain: DomainInfo, root_dims: UVec3, mut make_root: impl FnMut(OctKey) -> O) -> Self {
    let mut roots = Vec::with_capacity((root_dims.x * root_dims.y * root_dims.z) as usize);
    for x in 0..root_dims.x {
      for y in 0..root_dims.y {
        for z in 0..root_dims.z {
          roots.push(make_root(OctKey::root(x, y, z)));
        }
      }
    }
    Self {
      domain,
      root_dims,
      roots,
    }
  }

  #[inline]
  pub fn domain(&self) -> &DomainInfo {
    &self.domain
  }

  #[inline]
  pub fn root_dims(&self) -> UVec3 {
    self.root_dims
  }

  #[inline]
  pub fn roots(&self) -> &[O] {
    &self.roots
  }

  pub fn root_mut(&mut self, key: OctKey) -> Option<&mut O> {
    let index = self.root_index(key)?;
    self.roots.get_mut(index)
  }

  /// Width of a root oct.
  #[inline]
  pub fn root_width(&self) -> DVec3 {
    self.domain.width() / self.root_dims.as_dvec3()
  }

  /// Center of the root oct at `key`.
  pub fn root_center(&self, key: OctKey) -> DVec3 {
    let index = DVec3::new(key.x as f64, key.y as f64, key.z as f64);
    self.domain.left_edge + (index + 0.5) * self.root_width()
  }

  fn root_index(&self, key: OctKey) -> Option<usize> {
    let d = self.root_dims;
    if key.level != 0 || key.x >= d.x || key.y >= d.y || key.z >= d.z {
      return None;
    }
    Some(((key.x * d.y + key.y) * d.z + key.z) as usize)
  }

  fn root_keys(&self) -> impl Iterator<Item = OctKey> + '_ {
    let d = self.root_dims;
    (0..d.x).flat_map(move |x| (0..d.y).flat_map(move |y| (0..d.z).map(move |z| OctKey::root(x, y, z))))
  }

  /// Walk every root in storage order with a single visitor.
  #[tracing::instrument(skip_all, name = "octree::visit", fields(roots = self.roots.len()))]
  pub fn visit<S, V>(&self, selector: &S, visitor: &mut V, visit_covered: bool) -> TraversalStats
  where
    S: Selector + ?Sized,
    V: OctVisitor<O> + ?Sized,
  {
    let half_cell = self.root_width() * 0.5;
    let mut stats = TraversalStats::default();
    for (key, root) in self.root_keys().zip(&self.roots) {
      stats += recursively_visit_octs(
        selector,
        root,
        self.root_center(key),
        half_cell,
        key,
        &mut *visitor,
        visit_covered,
      );
    }
    tracing::debug!(
      octs_tested = stats.octs_tested,
      octs_pruned = stats.octs_pruned,
      cells_selected = stats.cells_selected,
      "octree traversal done"
    );
    stats
  }

  /// Walk roots in parallel. `make_visitor` builds one visitor per root;
  /// results come back in root storage order.
  #[tracing::instrument(skip_all, name = "octree::par_visit", fields(roots = self.roots.len()))]
  pub fn par_visit<S, V, F>(&self, selector: &S, make_visitor: F, visit_covered: bool) -> Vec<(V, TraversalStats)>
  where
    S: Selector + ?Sized,
    O: Sync,
    V: OctVisitor<O> + Send,
    F: Fn(OctKey) -> V + Sync,
  {
    let half_cell = self.root_width() * 0.5;
    let keys: Vec<OctKey> = self.root_keys().collect();
    keys
      .par_iter()
      .zip(self.roots.par_iter())
      .map(|(&key, root)| {
        let mut visitor = make_visitor(key);
        let stats = recursively_visit_octs(
          selector,
          root,
          self.root_center(key),
          half_cell,
          key,
          &mut visitor,
          visit_covered,
        );
        (visitor, stats)
      })
      .collect()
  }

  /// Number of selected leaf cells, computed in parallel.
  pub fn count_selected<S>(&self, selector: &S) -> usize
  where
    S: Selector + ?Sized,
    O: Sync,
  {
    self
      .par_visit(selector, |_| SelectedCount::default(), false)
      .into_iter()
      .map(|(count, _)| count.0)
      .sum()
  }
}

impl Octree<Oct> {
  /// Every root refined uniformly `depth` levels deep.
  pub fn uniform(domain: DomainInfo, root_dims: UVec3, depth: u32, domain_id: u64) -> Self {
    Self::new(domain, root_dims, |_| Oct::uniform(depth, domain_id))
  }

  /// Leaf cells across all roots.
  pub fn leaf_count(&self) -> usize {
    self.roots.iter().map(Oct::leaf_count).sum()
  }
}

#[derive(Default)]
struct SelectedCount(usize);

impl<O: ?Sized> OctVisitor<O> for SelectedCount {
  fn visit(&mut self, _oct: &O, _cell: &OctCell, selected: bool) {
    if selected {
      self.0 += 1;
    }
  }
}

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;
