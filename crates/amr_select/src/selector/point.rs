//! PointSelector - a single point in space.

use glam::DVec3;

use super::Selector;
use crate::bounds::axis_shifts;
use crate::config::SelectorConfig;
use crate::overlap::Overlap;

/// Selects whatever contains one point. A point has no volume, so boxes and
/// spheres are at best `Partial`.
#[derive(Clone, Debug)]
pub struct PointSelector {
  config: SelectorConfig,
  point: DVec3,
}

impl PointSelector {
  pub fn new(config: SelectorConfig, point: DVec3) -> Self {
    Self { config, point }
  }

  #[inline]
  pub fn point(&self) -> DVec3 {
    self.point
  }

  pub fn config_mut(&mut self) -> &mut SelectorConfig {
    &mut self.config
  }
}

impl Selector for PointSelector {
  fn config(&self) -> &SelectorConfig {
    &self.config
  }

  fn select_point(&self, pos: DVec3) -> Overlap {
    if self.config.periodic_offset(pos, self.point) == DVec3::ZERO {
      Overlap::Full
    } else {
      Overlap::None
    }
  }

  fn select_sphere(&self, pos: DVec3, radius: f64) -> Overlap {
    let rel = self.config.periodic_offset(pos, self.point);
    Overlap::partial_if(rel.length_squared() <= radius * radius)
  }

  /// Half-open: a point on a shared face belongs to the box on its right.
  fn select_bbox(&self, left_edge: DVec3, right_edge: DVec3) -> Overlap {
    let width = self.config.domain_width();
    let periodicity = self.config.periodicity();
    let inside = (0..3).all(|axis| {
      axis_shifts(width[axis], periodicity[axis]).into_iter().any(|shift| {
        let p = self.point[axis] + shift;
        p >= left_edge[axis] && p < right_edge[axis]
      })
    });
    Overlap::partial_if(inside)
  }
}

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;
