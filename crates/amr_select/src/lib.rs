//! amr_select - Region selection over adaptive-mesh datasets
//!
//! This crate decides which cells, grid patches and octree nodes of an
//! adaptive-mesh simulation intersect a region of interest (a point, a
//! sphere, a box, or everything), under optional periodic boundaries and
//! refinement-level limits.
//!
//! # Features
//!
//! - **Selectors**: one predicate contract (`select_point`, `select_sphere`,
//!   `select_bbox`, `select_cell`, `select_grid`) shared by every region
//!   shape, with a domain-restricted subset wrapper
//! - **Octree Traversal**: depth-first walk with partial/full/none pruning,
//!   sequential or one rayon task per root oct
//! - **Grid Traversal**: row-major cell visits and boolean selection masks
//!   for patches with a refinement child mask
//! - **Morton Masks**: per-level roaring bitsets keyed by Morton index, with
//!   ghost-zone padding and set algebra
//!
//! # Example
//!
//! ```ignore
//! use amr_select::{AnySelector, DomainInfo, Octree, RegionSpec, SelectorConfig};
//! use glam::{DVec3, UVec3};
//!
//! let config = SelectorConfig::new(DomainInfo::unit_periodic())?;
//! let spec = RegionSpec::Sphere { center: DVec3::splat(0.9), radius: 0.2 };
//! let selector = AnySelector::new(spec, config)?;
//!
//! let tree = Octree::uniform(DomainInfo::unit_periodic(), UVec3::splat(4), 3, 0);
//! println!("{} cells selected", tree.count_selected(&selector));
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod overlap;
pub mod periodic;
pub mod units;

// Re-export commonly used items
pub use config::{DomainInfo, SelectorConfig, DEFAULT_MAX_LEVEL};
pub use error::{Result, SelectorError};
pub use overlap::Overlap;
pub use units::{Length, UnitRegistry};

// Selector variants
pub mod selector;
pub use selector::{
  AlwaysSelector, AnySelector, DomainOwned, OctreeSubsetSelector, PointSelector, RegionSelector, RegionSpec,
  Selector, SphereSelector,
};

// Octree traversal
pub mod octree;
pub use octree::{Oct, OctCell, OctKey, OctNode, OctVisitor, Octree, TraversalStats};

// Grid patches and masks
pub mod grid;
pub use grid::{fill_mask, CellMask, ChildMask, Grid, GridVisitor};

// Morton-keyed bitsets
pub mod morton;
pub use morton::MortonMask;

#[cfg(test)]
mod test_utils;
