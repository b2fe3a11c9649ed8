//! SphereSelector - everything within a radius of a center point.

use glam::DVec3;

use super::Selector;
use crate::config::SelectorConfig;
use crate::error::{Result, SelectorError};
use crate::overlap::Overlap;

/// Sphere region with periodic-aware distances.
#[derive(Clone, Debug)]
pub struct SphereSelector {
  config: SelectorConfig,
  center: DVec3,
  radius: f64,
  radius2: f64,
}

impl SphereSelector {
  pub fn new(config: SelectorConfig, center: DVec3, radius: f64) -> Result<Self> {
    if !radius.is_finite() || radius < 0.0 {
      return Err(SelectorError::InvalidRadius(radius));
    }
    Ok(Self {
      config,
      center,
      radius,
      radius2: radius * radius,
    })
  }

  #[inline]
  pub fn center(&self) -> DVec3 {
    self.center
  }

  #[inline]
  pub fn radius(&self) -> f64 {
    self.radius
  }

  pub fn config_mut(&mut self) -> &mut SelectorConfig {
    &mut self.config
  }
}

impl Selector for SphereSelector {
  fn config(&self) -> &SelectorConfig {
    &self.config
  }

  fn select_point(&self, pos: DVec3) -> Overlap {
    let rel = self.config.periodic_offset(pos, self.center);
    if rel.length_squared() <= self.radius2 {
      Overlap::Full
    } else {
      Overlap::None
    }
  }

  fn select_sphere(&self, pos: DVec3, radius: f64) -> Overlap {
    let dist = self.config.periodic_offset(pos, self.center).length();
    if dist > self.radius + radius {
      Overlap::None
    } else if dist + radius <= self.radius {
      Overlap::Full
    } else {
      Overlap::Partial
    }
  }

  fn select_bbox(&self, left_edge: DVec3, right_edge: DVec3) -> Overlap {
    let half = (right_edge - left_edge) * 0.5;
    let box_center = (left_edge + right_edge) * 0.5;
    let rel = self.config.periodic_offset(box_center, self.center);

    // Closest point of the box to the sphere center.
    let closest = rel - rel.clamp(-half, half);
    if closest.length_squared() > self.radius2 {
      return Overlap::None;
    }
    let farthest = rel.abs() + half;
    if farthest.length_squared() <= self.radius2 {
      Overlap::Full
    } else {
      Overlap::Partial
    }
  }
}

#[cfg(test)]
#[path = "sphere_test.rs"]
mod sphere_test;
