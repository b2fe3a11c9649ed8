//! OctreeSubsetSelector - a shared base selector restricted to one domain.

use std::sync::Arc;

use glam::DVec3;

use super::{DomainOwned, Selector};
use crate::config::SelectorConfig;
use crate::error::Result;
use crate::grid::{CellMask, ChildMask};
use crate::overlap::Overlap;

/// Restricts a base selector to nodes owned by `domain_id`.
///
/// The base is shared through an `Arc`, so it always outlives the wrapper and
/// may back several subset selectors at once. Only `select_grid` sees node
/// ownership; every other predicate is forwarded unchanged.
#[derive(Debug)]
pub struct OctreeSubsetSelector<S: Selector + ?Sized> {
  base_selector: Arc<S>,
  domain_id: u64,
}

impl<S: Selector + ?Sized> OctreeSubsetSelector<S> {
  pub fn new(base_selector: Arc<S>, domain_id: u64) -> Self {
    Self {
      base_selector,
      domain_id,
    }
  }

  #[inline]
  pub fn domain_id(&self) -> u64 {
    self.domain_id
  }

  #[inline]
  pub fn base_selector(&self) -> &Arc<S> {
    &self.base_selector
  }
}

impl<S: Selector + ?Sized> Clone for OctreeSubsetSelector<S> {
  fn clone(&self) -> Self {
    Self {
      base_selector: Arc::clone(&self.base_selector),
      domain_id: self.domain_id,
    }
  }
}

impl<S: Selector + ?Sized> Selector for OctreeSubsetSelector<S> {
  fn config(&self) -> &SelectorConfig {
    self.base_selector.config()
  }

  fn select_point(&self, pos: DVec3) -> Overlap {
    self.base_selector.select_point(pos)
  }

  fn select_sphere(&self, pos: DVec3, radius: f64) -> Overlap {
    self.base_selector.select_sphere(pos, radius)
  }

  fn select_bbox(&self, left_edge: DVec3, right_edge: DVec3) -> Overlap {
    self.base_selector.select_bbox(left_edge, right_edge)
  }

  fn select_cell(&self, pos: DVec3, dds: DVec3) -> Overlap {
    self.base_selector.select_cell(pos, dds)
  }

  /// A node the base selects but another domain owns comes back `Foreign`:
  /// not selected itself, yet still worth descending into.
  fn select_grid(
    &self,
    left_edge: DVec3,
    right_edge: DVec3,
    level: i32,
    node: Option<&dyn DomainOwned>,
  ) -> Overlap {
    let res = self.base_selector.select_grid(left_edge, right_edge, level, node);
    match node {
      Some(node) if res.is_selected() && node.domain_id() != self.domain_id => Overlap::Foreign,
      _ => res,
    }
  }

  fn fill_mask_selector(
    &self,
    left_edge: DVec3,
    right_edge: DVec3,
    dds: DVec3,
    dims: [usize; 3],
    child_mask: &ChildMask,
    mask: &mut CellMask,
    level: i32,
  ) -> Result<usize> {
    self
      .base_selector
      .fill_mask_selector(left_edge, right_edge, dds, dims, child_mask, mask, level)
  }
}

#[cfg(test)]
#[path = "subset_test.rs"]
mod subset_test;
