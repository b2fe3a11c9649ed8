//! RegionSpec / AnySelector - runtime choice of a built-in region shape.

use glam::DVec3;

use super::{
  AlwaysSelector, DomainOwned, PointSelector, RegionSelector, Selector, SphereSelector,
};
use crate::config::SelectorConfig;
use crate::error::Result;
use crate::overlap::Overlap;

/// Region of interest, in code length units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionSpec {
  /// Everything.
  All,
  /// A single point.
  Point(DVec3),
  /// Sphere of the given center and radius.
  Sphere { center: DVec3, radius: f64 },
  /// Axis-aligned box.
  Box { left: DVec3, right: DVec3 },
}

/// Forward a call to whichever shape the enum holds.
macro_rules! dispatch {
  ($value:expr, $s:ident => $call:expr) => {
    match $value {
      AnySelector::Always($s) => $call,
      AnySelector::Point($s) => $call,
      AnySelector::Sphere($s) => $call,
      AnySelector::Region($s) => $call,
    }
  };
}

/// Closed set of built-in selectors.
#[derive(Clone, Debug)]
pub enum AnySelector {
  Always(AlwaysSelector),
  Point(PointSelector),
  Sphere(SphereSelector),
  Region(RegionSelector),
}

impl AnySelector {
  /// Build the selector for `spec`. Invalid shapes fail here, before any
  /// traversal.
  pub fn new(spec: RegionSpec, config: SelectorConfig) -> Result<Self> {
    Ok(match spec {
      RegionSpec::All => Self::Always(AlwaysSelector::new(config)),
      RegionSpec::Point(p) => Self::Point(PointSelector::new(config, p)),
      RegionSpec::Sphere { center, radius } => {
        Self::Sphere(SphereSelector::new(config, center, radius)?)
      }
      RegionSpec::Box { left, right } => Self::Region(RegionSelector::new(config, left, right)?),
    })
  }

  pub fn config_mut(&mut self) -> &mut SelectorConfig {
    dispatch!(self, s => s.config_mut())
  }
}

impl Selector for AnySelector {
  fn config(&self) -> &SelectorConfig {
    dispatch!(self, s => s.config())
  }

  fn select_point(&self, pos: DVec3) -> Overlap {
    dispatch!(self, s => s.select_point(pos))
  }

  fn select_sphere(&self, pos: DVec3, radius: f64) -> Overlap {
    dispatch!(self, s => s.select_sphere(pos, radius))
  }

  fn select_bbox(&self, left_edge: DVec3, right_edge: DVec3) -> Overlap {
    dispatch!(self, s => s.select_bbox(left_edge, right_edge))
  }

  fn select_cell(&self, pos: DVec3, dds: DVec3) -> Overlap {
    dispatch!(self, s => s.select_cell(pos, dds))
  }

  fn select_grid(
    &self,
    left_edge: DVec3,
    right_edge: DVec3,
    level: i32,
    node: Option<&dyn DomainOwned>,
  ) -> Overlap {
    dispatch!(self, s => s.select_grid(left_edge, right_edge, level, node))
  }
}
