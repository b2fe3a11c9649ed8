//! Grid module - Cartesian patches with a refinement child mask.
//!
//! # Module Structure
//!
//! - [`cell_mask`]: `CellMask` and `ChildMask` - dense per-cell flags
//! - [`patch`]: `Grid` - one patch at one level
//! - [`traversal`]: `visit_grid_cells` - per-cell visitor callbacks
//! - [`fill`]: `fill_mask_selector` / `fill_mask` - selection masks

pub mod cell_mask;
pub mod fill;
pub mod patch;
pub mod traversal;

pub use cell_mask::{CellMask, ChildMask};
pub use fill::{fill_mask, fill_mask_selector};
pub use patch::Grid;
pub use traversal::{check_child_masked, visit_grid_cells, GridVisitor};
