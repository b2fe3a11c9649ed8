//! Mask builder - which cells of a grid patch the selector picks.

use glam::DVec3;

use super::{CellMask, ChildMask, Grid};
use crate::error::{Result, SelectorError};
use crate::selector::Selector;

/// Fill `mask` with the selected cells of a patch and return how many were
/// selected.
///
/// Shapes are checked before anything is written. Levels outside the
/// selector's bounds leave the mask untouched and return 0. Below
/// `max_level`, cells covered by a finer child are written false; at
/// `max_level` the finer children are out of reach, so every cell is tested.
#[allow(clippy::too_many_arguments)]
pub fn fill_mask_selector<S: Selector + ?Sized>(
  selector: &S,
  left_edge: DVec3,
  right_edge: DVec3,
  dds: DVec3,
  dims: [usize; 3],
  child_mask: &ChildMask,
  mask: &mut CellMask,
  level: i32,
) -> Result<usize> {
  debug_assert!(
    right_edge.cmpge(left_edge).all(),
    "grid right edge must not be left of its left edge"
  );
  if mask.dims() != dims {
    return Err(SelectorError::MaskShapeMismatch {
      expected: dims,
      actual: mask.dims(),
    });
  }
  if child_mask.dims() != dims {
    return Err(SelectorError::ChildMaskShapeMismatch {
      expected: dims,
      actual: child_mask.dims(),
    });
  }

  let config = selector.config();
  if !config.level_in_bounds(level) {
    return Ok(0);
  }
  let this_level = level == config.max_level();

  let mut total = 0;
  for i in 0..dims[0] {
    for j in 0..dims[1] {
      for k in 0..dims[2] {
        let covered = !this_level && child_mask.is_covered(i, j, k);
        let idx = DVec3::new(i as f64, j as f64, k as f64);
        let pos = left_edge + (idx + 0.5) * dds;
        let selected = !covered && selector.select_cell(pos, dds).is_selected();
        mask.set(i, j, k, selected);
        total += selected as usize;
      }
    }
  }
  Ok(total)
}

/// Selection mask of a whole patch, or `None` when nothing in it is
/// selected.
#[tracing::instrument(skip_all, name = "grid::fill_mask", fields(level = grid.level))]
pub fn fill_mask<S: Selector + ?Sized>(selector: &S, grid: &Grid) -> Result<Option<CellMask>> {
  let res = selector.select_grid(grid.left_edge, grid.right_edge, grid.level, Some(grid));
  if !res.is_selected() {
    return Ok(None);
  }
  let mut mask = CellMask::new(grid.dims);
  let total = selector.fill_mask_selector(
    grid.left_edge,
    grid.right_edge,
    grid.dds(),
    grid.dims,
    &grid.child_mask,
    &mut mask,
    grid.level,
  )?;
  tracing::debug!(total, cells = grid.cell_count(), "filled grid mask");
  Ok((total > 0).then_some(mask))
}

#[cfg(test)]
#[path = "fill_test.rs"]
mod fill_test;
