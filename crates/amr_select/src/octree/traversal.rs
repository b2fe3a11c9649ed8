//! Depth-first selection over an octree.
//!
//! # Algorithm
//!
//! For each oct, reached with the center `pos` of the oct and the width
//! `dds` of one of its cells:
//!
//! 1. **Classify**: `select_grid(pos - dds, pos + dds, level, oct)`. A miss
//!    prunes the whole subtree.
//! 2. **Covered pass**: with `visit_covered`, every cell of a selected oct is
//!    visited first, refined or not.
//! 3. **Descend**: octants with a child recurse (while below `max_level`);
//!    octants without one are visited as leaf cells.
//!
//! Octs coarser than `min_level` are never selected themselves, but are
//! descended through while their box intersects the region.
//!
//! Octants are always taken in order 0..8 (bit 0 = +x, bit 1 = +y,
//! bit 2 = +z), so a traversal is deterministic for a fixed tree.

use std::ops::AddAssign;

use glam::DVec3;

use super::node::{octant_offset, OctKey};
use super::oct::OctNode;
use crate::overlap::Overlap;
use crate::selector::Selector;

/// Cell handed to an [`OctVisitor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctCell {
  /// Key of the oct holding the cell.
  pub oct_key: OctKey,
  /// Octant of the cell within its oct.
  pub octant: u8,
  /// Cell center.
  pub center: DVec3,
  /// Cell width.
  pub dds: DVec3,
  /// True when the cell is refined into a child oct.
  pub covered: bool,
}

impl OctCell {
  /// Level of the oct holding this cell.
  #[inline]
  pub fn level(&self) -> i32 {
    self.oct_key.level
  }

  /// Key addressing the cell itself, one level finer than its oct.
  #[inline]
  pub fn key(&self) -> OctKey {
    self.oct_key.child(self.octant)
  }
}

/// Receives every cell the traversal reaches.
pub trait OctVisitor<O: ?Sized> {
  fn visit(&mut self, oct: &O, cell: &OctCell, selected: bool);
}

impl<O: ?Sized, F> OctVisitor<O> for F
where
  F: FnMut(&O, &OctCell, bool),
{
  #[inline]
  fn visit(&mut self, oct: &O, cell: &OctCell, selected: bool) {
    self(oct, cell, selected)
  }
}

/// Counters from one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
  /// Octs whose box was classified.
  pub octs_tested: usize,
  /// Octs whose subtree was skipped.
  pub octs_pruned: usize,
  /// Visitor callbacks made.
  pub cells_visited: usize,
  /// Callbacks with `selected == true`.
  pub cells_selected: usize,
}

impl TraversalStats {
  /// Fraction of tested octs that were pruned.
  #[inline]
  pub fn prune_ratio(&self) -> f64 {
    if self.octs_tested == 0 {
      0.0
    } else {
      self.octs_pruned as f64 / self.octs_tested as f64
    }
  }
}

impl AddAssign for TraversalStats {
  fn add_assign(&mut self, rhs: Self) {
    self.octs_tested += rhs.octs_tested;
    self.octs_pruned += rhs.octs_pruned;
    self.cells_visited += rhs.cells_visited;
    self.cells_selected += rhs.cells_selected;
  }
}

/// Walk the subtree under `root` and hand every reachable cell to `visitor`.
///
/// `pos` is the center of `root`, `dds` the width of one of its cells and
/// `key` its address (the key's level is the oct's level).
pub fn recursively_visit_octs<S, O, V>(
  selector: &S,
  root: &O,
  pos: DVec3,
  dds: DVec3,
  key: OctKey,
  visitor: &mut V,
  visit_covered: bool,
) -> TraversalStats
where
  S: Selector + ?Sized,
  O: OctNode,
  V: OctVisitor<O> + ?Sized,
{
  let mut walk = OctWalk {
    selector,
    visitor,
    visit_covered,
    stats: TraversalStats::default(),
  };
  walk.visit_octs(root, pos, dds, key);
  walk.stats
}

/// Visit the cell at `octant` of `oct` and report whether it was selected.
///
/// Covered cells count as selected only when the selector asks for
/// overlap cells.
#[allow(clippy::too_many_arguments)]
pub fn visit_oct_cells<S, O, V>(
  selector: &S,
  oct: &O,
  pos: DVec3,
  dds: DVec3,
  key: OctKey,
  octant: u8,
  covered: bool,
  visitor: &mut V,
) -> bool
where
  S: Selector + ?Sized,
  O: OctNode,
  V: OctVisitor<O> + ?Sized,
{
  let center = cell_center(pos, dds, octant);
  let mut selected = selector.select_cell(center, dds).is_selected();
  if covered {
    selected &= selector.config().overlap_cells() > 0;
  }
  let cell = OctCell {
    oct_key: key,
    octant,
    center,
    dds,
    covered,
  };
  visitor.visit(oct, &cell, selected);
  selected
}

/// Center of the cell at `octant` of an oct centered on `pos`.
#[inline]
pub fn cell_center(pos: DVec3, dds: DVec3, octant: u8) -> DVec3 {
  let [ox, oy, oz] = octant_offset(octant);
  pos + (DVec3::new(ox as f64, oy as f64, oz as f64) - 0.5) * dds
}

struct OctWalk<'a, S: ?Sized, V: ?Sized> {
  selector: &'a S,
  visitor: &'a mut V,
  visit_covered: bool,
  stats: TraversalStats,
}

impl<S, V> OctWalk<'_, S, V>
where
  S: Selector + ?Sized,
  V: ?Sized,
{
  fn visit_octs<O>(&mut self, oct: &O, pos: DVec3, dds: DVec3, key: OctKey)
  where
    O: OctNode,
    V: OctVisitor<O>,
  {
    self.stats.octs_tested += 1;
    let res = self.classify(oct, pos, dds, key.level);
    if res == Overlap::None {
      self.stats.octs_pruned += 1;
      return;
    }

    let this_level = res.is_selected();
    let next_level = key.level < self.selector.config().max_level();
    let child_of = |octant: u8| if next_level { oct.child(octant) } else { None };

    if self.visit_covered && this_level {
      for octant in 0..8u8 {
        let covered = child_of(octant).is_some();
        self.cell(oct, pos, dds, key, octant, covered);
      }
    }

    for octant in 0..8u8 {
      match child_of(octant) {
        Some(child) => {
          let child_pos = cell_center(pos, dds, octant);
          self.visit_octs(child, child_pos, dds * 0.5, key.child(octant));
        }
        None if this_level && !self.visit_covered => {
          self.cell(oct, pos, dds, key, octant, false);
        }
        None => {}
      }
    }
  }

  /// Octs coarser than `min_level` only steer the descent: they pass
  /// through as `Foreign` while their box touches the region.
  fn classify<O: OctNode>(&self, oct: &O, pos: DVec3, dds: DVec3, level: i32) -> Overlap {
    let (left, right) = (pos - dds, pos + dds);
    if level < self.selector.config().min_level() {
      return match self.selector.select_bbox(left, right) {
        Overlap::None => Overlap::None,
        _ => Overlap::Foreign,
      };
    }
    self.selector.select_grid(left, right, level, Some(oct))
  }

  fn cell<O>(&mut self, oct: &O, pos: DVec3, dds: DVec3, key: OctKey, octant: u8, covered: bool)
  where
    O: OctNode,
    V: OctVisitor<O>,
  {
    let selected = visit_oct_cells(self.selector, oct, pos, dds, key, octant, covered, &mut *self.visitor);
    self.stats.cells_visited += 1;
    if selected {
      self.stats.cells_selected += 1;
    }
  }
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
