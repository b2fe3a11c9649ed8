//! Selector module - the geometric predicate contract and its variants.
//!
//! Every region shape implements [`Selector`]. The traversal engines are
//! generic over it, so predicate calls resolve statically; [`AnySelector`]
//! closes the set of built-in shapes into one enum for callers that pick a
//! shape at runtime.
//!
//! # Module Structure
//!
//! - [`always`]: `AlwaysSelector` - selects everything
//! - [`subset`]: `OctreeSubsetSelector` - restricts a shared base selector to
//!   one owning domain
//! - [`point`], [`sphere`], [`region`]: concrete region shapes
//! - [`any`]: `RegionSpec` and the closed `AnySelector` enum

use glam::DVec3;

use crate::bounds::CellBox;
use crate::config::SelectorConfig;
use crate::error::Result;
use crate::grid::{self, CellMask, ChildMask};
use crate::overlap::Overlap;

pub mod always;
pub mod any;
pub mod point;
pub mod region;
pub mod sphere;
pub mod subset;

pub use always::AlwaysSelector;
pub use any::{AnySelector, RegionSpec};
pub use point::PointSelector;
pub use region::RegionSelector;
pub use sphere::SphereSelector;
pub use subset::OctreeSubsetSelector;

/// Anything that belongs to a single owning domain (an oct, a grid patch).
pub trait DomainOwned {
  fn domain_id(&self) -> u64;
}

/// Geometric predicates over a fixed region.
///
/// All predicates are pure functions of the selector's configuration and
/// their arguments; selectors are shared read-only across threads.
pub trait Selector: Send + Sync {
  /// Level bounds, domain geometry and periodicity.
  fn config(&self) -> &SelectorConfig;

  /// Classify a single point.
  fn select_point(&self, pos: DVec3) -> Overlap;

  /// Classify a sphere of the given center and radius.
  fn select_sphere(&self, pos: DVec3, radius: f64) -> Overlap;

  /// Classify an axis-aligned box, including its wrapped copies on periodic
  /// axes.
  fn select_bbox(&self, left_edge: DVec3, right_edge: DVec3) -> Overlap;

  /// Classify a cell of center `pos` and width `dds`, grown by
  /// `overlap_cells` cell widths on every side.
  fn select_cell(&self, pos: DVec3, dds: DVec3) -> Overlap {
    let pad = dds * self.config().overlap_cells() as f64;
    let cell = CellBox::from_center(pos, dds).padded(pad);
    self.select_bbox(cell.left, cell.right)
  }

  /// Classify a grid patch or oct at `level`. Nodes outside the level bounds
  /// are never selected. `node` lets variants filter on ownership.
  fn select_grid(
    &self,
    left_edge: DVec3,
    right_edge: DVec3,
    level: i32,
    node: Option<&dyn DomainOwned>,
  ) -> Overlap {
    let _ = node;
    if !self.level_in_bounds(level) {
      return Overlap::None;
    }
    self.select_bbox(left_edge, right_edge)
  }

  #[inline]
  fn level_in_bounds(&self, level: i32) -> bool {
    self.config().level_in_bounds(level)
  }

  /// Fill `mask` with the selected, uncovered cells of a grid patch.
  ///
  /// See [`grid::fill_mask_selector`].
  #[allow(clippy::too_many_arguments)]
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
    grid::fill_mask_selector(self, left_edge, right_edge, dds, dims, child_mask, mask, level)
  }
}
