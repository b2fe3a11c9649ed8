//! Octree module - implicit-address octree and selection traversal.
//!
//! # Module Structure
//!
//! - [`node`]: `OctKey` - integer address of an oct or cell
//! - [`oct`]: `OctNode` trait and the in-memory `Oct`
//! - [`traversal`]: depth-first selection walk and visitor callbacks
//! - [`container`]: `Octree` - root grid with sequential and parallel walks

pub mod container;
pub mod node;
pub mod oct;
pub mod traversal;

pub use container::Octree;
pub use node::{octant_offset, OctKey};
pub use oct::{Oct, OctNode};
pub use traversal::{
  cell_center, recursively_visit_octs, visit_oct_cells, OctCell, OctVisitor, TraversalStats,
};
