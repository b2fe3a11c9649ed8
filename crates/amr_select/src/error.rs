//! Error type shared by selector construction and the mask builders.

use thiserror::Error;

/// Failures raised before any traversal or output write takes place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
  /// Refinement bounds are inverted or negative.
  #[error("invalid level bounds: min_level {min_level} > max_level {max_level} or negative")]
  InvalidLevelBounds { min_level: i32, max_level: i32 },

  /// A periodic axis has no positive extent, or an extent is not finite.
  #[error("domain width on axis {axis} must be positive and finite, got {width}")]
  NonPositiveDomainWidth { axis: usize, width: f64 },

  /// Output mask does not match the grid dimensions.
  #[error("mask dims {actual:?} do not match grid dims {expected:?}")]
  MaskShapeMismatch {
    expected: [usize; 3],
    actual: [usize; 3],
  },

  /// Child mask does not match the grid dimensions.
  #[error("child mask dims {actual:?} do not match grid dims {expected:?}")]
  ChildMaskShapeMismatch {
    expected: [usize; 3],
    actual: [usize; 3],
  },

  /// Sphere radius is negative or not finite.
  #[error("sphere radius must be finite and non-negative, got {0}")]
  InvalidRadius(f64),

  /// Region box has its right edge left of its left edge.
  #[error("region right edge is left of its left edge on axis {axis}")]
  InvalidRegion { axis: usize },

  /// Unit name has no registered conversion to code length.
  #[error("cannot convert unit `{0}` to code_length")]
  UnknownUnit(String),

  /// Morton keys hold 21 bits per axis.
  #[error("morton depth {max_level} exceeds the 21 levels a 64-bit key can address")]
  MortonDepth { max_level: u32 },

  /// Subtree key lies outside the domain or below the requested depth.
  #[error("oct key ({x}, {y}, {z}) at level {level} is outside a depth-{max_level} domain")]
  KeyOutOfDomain {
    x: u32,
    y: u32,
    z: u32,
    level: i32,
    max_level: u32,
  },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SelectorError>;
