//! Grid traversal - visit every cell of a patch with its selection status.

use super::{CellMask, Grid};
use crate::error::{Result, SelectorError};
use crate::selector::Selector;

/// Receives one call per cell of a visited grid.
pub trait GridVisitor {
  fn visit(&mut self, grid: &Grid, index: [usize; 3], selected: bool);
}

impl<F> GridVisitor for F
where
  F: FnMut(&Grid, [usize; 3], bool),
{
  #[inline]
  fn visit(&mut self, grid: &Grid, index: [usize; 3], selected: bool) {
    self(grid, index, selected)
  }
}

/// True when the cell at `index` is covered by a finer child grid.
#[inline]
pub fn check_child_masked(grid: &Grid, index: [usize; 3]) -> bool {
  grid.child_mask.is_covered(index[0], index[1], index[2])
}

/// Visit the cells of `grid` in row-major order (z fastest).
///
/// With `cached_mask` the selection bit is read from it instead of being
/// recomputed. Grids outside the selector's level bounds produce no visits.
/// At `max_level` the child mask is ignored.
pub fn visit_grid_cells<S, V>(
  selector: &S,
  grid: &Grid,
  visitor: &mut V,
  cached_mask: Option<&CellMask>,
) -> Result<()>
where
  S: Selector + ?Sized,
  V: GridVisitor + ?Sized,
{
  if let Some(cached) = cached_mask {
    if cached.dims() != grid.dims {
      return Err(SelectorError::MaskShapeMismatch {
        expected: grid.dims,
        actual: cached.dims(),
      });
    }
  }

  let config = selector.config();
  if !config.level_in_bounds(grid.level) {
    return Ok(());
  }
  let this_level = grid.level == config.max_level();
  let dds = grid.dds();

  let mut flat = 0;
  for i in 0..grid.dims[0] {
    for j in 0..grid.dims[1] {
      for k in 0..grid.dims[2] {
        let index = [i, j, k];
        let selected = match cached_mask {
          Some(cached) => cached.get_flat(flat),
          None => {
            let masked = !this_level && check_child_masked(grid, index);
            !masked && selector.select_cell(grid.cell_center(i, j, k), dds).is_selected()
          }
        };
        visitor.visit(grid, index, selected);
        flat += 1;
      }
    }
  }
  Ok(())
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
