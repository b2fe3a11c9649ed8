//! SelectorConfig - refinement bounds and domain geometry shared by every
//! selector variant.

use glam::DVec3;

use crate::error::{Result, SelectorError};
use crate::periodic;

/// Default inclusive finest refinement level.
pub const DEFAULT_MAX_LEVEL: i32 = 99;

/// Domain description of a dataset, in code length units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainInfo {
  /// Domain left edge.
  pub left_edge: DVec3,
  /// Domain right edge.
  pub right_edge: DVec3,
  /// Per-axis wraparound.
  pub periodicity: [bool; 3],
}

impl DomainInfo {
  pub fn new(left_edge: DVec3, right_edge: DVec3, periodicity: [bool; 3]) -> Self {
    Self {
      left_edge,
      right_edge,
      periodicity,
    }
  }

  /// Unit cube, non-periodic.
  pub fn unit() -> Self {
    Self::new(DVec3::ZERO, DVec3::ONE, [false; 3])
  }

  /// Unit cube, periodic on every axis.
  pub fn unit_periodic() -> Self {
    Self::new(DVec3::ZERO, DVec3::ONE, [true; 3])
  }

  #[inline]
  pub fn width(&self) -> DVec3 {
    self.right_edge - self.left_edge
  }
}

impl Default for DomainInfo {
  fn default() -> Self {
    Self::unit()
  }
}

/// Validated selector configuration.
///
/// Immutable once a selector owns it, except for the level bounds which may
/// be reset through [`SelectorConfig::set_level_bounds`] before traversal.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorConfig {
  min_level: i32,
  max_level: i32,
  overlap_cells: u32,
  domain_left_edge: DVec3,
  domain_right_edge: DVec3,
  domain_width: DVec3,
  periodicity: [bool; 3],
}

impl SelectorConfig {
  /// Configuration covering every level of `domain`.
  pub fn new(domain: DomainInfo) -> Result<Self> {
    let width = domain.width();
    for axis in 0..3 {
      let w = width[axis];
      let bad = !w.is_finite() || w < 0.0 || (domain.periodicity[axis] && w <= 0.0);
      if bad {
        tracing::warn!(axis, width = w, "rejecting selector domain");
        return Err(SelectorError::NonPositiveDomainWidth { axis, width: w });
      }
    }
    Ok(Self {
      min_level: 0,
      max_level: DEFAULT_MAX_LEVEL,
      overlap_cells: 0,
      domain_left_edge: domain.left_edge,
      domain_right_edge: domain.right_edge,
      domain_width: width,
      periodicity: domain.periodicity,
    })
  }

  /// Restrict to levels `[min_level, max_level]`.
  pub fn with_levels(mut self, min_level: i32, max_level: i32) -> Result<Self> {
    self.set_level_bounds(min_level, max_level)?;
    Ok(self)
  }

  /// Expand cell tests by `overlap_cells` cell widths per side. A non-zero
  /// value also makes cells covered by finer octs count as selected.
  pub fn with_overlap_cells(mut self, overlap_cells: u32) -> Self {
    self.overlap_cells = overlap_cells;
    self
  }

  /// Reset the level bounds. Must happen before the selector is shared.
  pub fn set_level_bounds(&mut self, min_level: i32, max_level: i32) -> Result<()> {
    if min_level < 0 || min_level > max_level {
      tracing::warn!(min_level, max_level, "rejecting selector level bounds");
      return Err(SelectorError::InvalidLevelBounds {
        min_level,
        max_level,
      });
    }
    self.min_level = min_level;
    self.max_level = max_level;
    Ok(())
  }

  #[inline]
  pub fn min_level(&self) -> i32 {
    self.min_level
  }

  #[inline]
  pub fn max_level(&self) -> i32 {
    self.max_level
  }

  #[inline]
  pub fn overlap_cells(&self) -> u32 {
    self.overlap_cells
  }

  #[inline]
  pub fn domain_left_edge(&self) -> DVec3 {
    self.domain_left_edge
  }

  #[inline]
  pub fn domain_right_edge(&self) -> DVec3 {
    self.domain_right_edge
  }

  #[inline]
  pub fn domain_width(&self) -> DVec3 {
    self.domain_width
  }

  #[inline]
  pub fn periodicity(&self) -> [bool; 3] {
    self.periodicity
  }

  /// True when `level` lies in `[min_level, max_level]`.
  #[inline]
  pub fn level_in_bounds(&self, level: i32) -> bool {
    level >= self.min_level && level <= self.max_level
  }

  /// Shortest signed displacement `x1 - x2` along `axis`.
  #[inline]
  pub fn periodic_difference(&self, x1: f64, x2: f64, axis: usize) -> f64 {
    periodic::difference(x1, x2, self.domain_width[axis], self.periodicity[axis])
  }

  /// Shortest displacement `a - b` on all three axes.
  #[inline]
  pub fn periodic_offset(&self, a: DVec3, b: DVec3) -> DVec3 {
    DVec3::new(
      self.periodic_difference(a.x, b.x, 0),
      self.periodic_difference(a.y, b.y, 1),
      self.periodic_difference(a.z, b.z, 2),
    )
  }
}

impl Default for SelectorConfig {
  fn default() -> Self {
    Self {
      min_level: 0,
      max_level: DEFAULT_MAX_LEVEL,
      overlap_cells: 0,
      domain_left_edge: DVec3::ZERO,
      domain_right_edge: DVec3::ONE,
      domain_width: DVec3::ONE,
      periodicity: [false; 3],
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
