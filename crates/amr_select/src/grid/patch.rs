//! Grid - a Cartesian patch of cells at one refinement level.

use glam::DVec3;

use super::ChildMask;
use crate::error::{Result, SelectorError};
use crate::selector::DomainOwned;

/// Uniform block of cells with a child mask.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
  /// Left edge of the patch.
  pub left_edge: DVec3,
  /// Right edge of the patch.
  pub right_edge: DVec3,
  /// Refinement level (0 = coarsest).
  pub level: i32,
  /// Cells per axis.
  pub dims: [usize; 3],
  /// Cells covered by finer grids.
  pub child_mask: ChildMask,
  /// Owning domain.
  pub domain_id: u64,
}

impl Grid {
  /// Create a patch, checking the child mask against `dims`.
  pub fn new(
    left_edge: DVec3,
    right_edge: DVec3,
    level: i32,
    dims: [usize; 3],
    child_mask: ChildMask,
  ) -> Result<Self> {
    if child_mask.dims() != dims {
      return Err(SelectorError::ChildMaskShapeMismatch {
        expected: dims,
        actual: child_mask.dims(),
      });
    }
    Ok(Self {
      left_edge,
      right_edge,
      level,
      dims,
      child_mask,
      domain_id: 0,
    })
  }

  /// Patch with no refined cells.
  pub fn leaf(left_edge: DVec3, right_edge: DVec3, level: i32, dims: [usize; 3]) -> Self {
    Self {
      left_edge,
      right_edge,
      level,
      dims,
      child_mask: ChildMask::all_leaves(dims),
      domain_id: 0,
    }
  }

  pub fn with_domain(mut self, domain_id: u64) -> Self {
    self.domain_id = domain_id;
    self
  }

  /// Cell width per axis.
  #[inline]
  pub fn dds(&self) -> DVec3 {
    let dims = DVec3::new(self.dims[0] as f64, self.dims[1] as f64, self.dims[2] as f64);
    (self.right_edge - self.left_edge) / dims
  }

  /// Center of cell `(i, j, k)`.
  #[inline]
  pub fn cell_center(&self, i: usize, j: usize, k: usize) -> DVec3 {
    let idx = DVec3::new(i as f64, j as f64, k as f64);
    self.left_edge + (idx + 0.5) * self.dds()
  }

  #[inline]
  pub fn cell_count(&self) -> usize {
    self.dims[0] * self.dims[1] * self.dims[2]
  }
}

impl DomainOwned for Grid {
  fn domain_id(&self) -> u64 {
    self.domain_id
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dds_and_centers() {
    let grid = Grid::leaf(DVec3::ZERO, DVec3::new(1.0, 2.0, 4.0), 0, [4, 4, 4]);
    assert_eq!(grid.dds(), DVec3::new(0.25, 0.5, 1.0));
    assert_eq!(grid.cell_center(0, 0, 0), DVec3::new(0.125, 0.25, 0.5));
    assert_eq!(grid.cell_center(3, 3, 3), DVec3::new(0.875, 1.75, 3.5));
    assert_eq!(grid.cell_count(), 64);
  }

  #[test]
  fn test_child_mask_shape_checked() {
    let err = Grid::new(
      DVec3::ZERO,
      DVec3::ONE,
      0,
      [4, 4, 4],
      ChildMask::all_leaves([4, 4, 2]),
    )
    .unwrap_err();
    assert_eq!(
      err,
      SelectorError::ChildMaskShapeMismatch {
        expected: [4, 4, 4],
        actual: [4, 4, 2]
      }
    );
  }
}
