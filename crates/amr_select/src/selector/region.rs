//! RegionSelector - an axis-aligned box region.

use glam::DVec3;

use super::Selector;
use crate::bounds::{axis_shifts, classify_interval};
use crate::config::SelectorConfig;
use crate::error::{Result, SelectorError};
use crate::overlap::Overlap;

/// Box region `[left_edge, right_edge)`. On periodic axes the region also
/// matches objects one domain width away.
#[derive(Clone, Debug)]
pub struct RegionSelector {
  config: SelectorConfig,
  left_edge: DVec3,
  right_edge: DVec3,
}

impl RegionSelector {
  pub fn new(config: SelectorConfig, left_edge: DVec3, right_edge: DVec3) -> Result<Self> {
    for axis in 0..3 {
      if !(right_edge[axis] >= left_edge[axis]) {
        return Err(SelectorError::InvalidRegion { axis });
      }
    }
    Ok(Self {
      config,
      left_edge,
      right_edge,
    })
  }

  #[inline]
  pub fn left_edge(&self) -> DVec3 {
    self.left_edge
  }

  #[inline]
  pub fn right_edge(&self) -> DVec3 {
    self.right_edge
  }

  pub fn config_mut(&mut self) -> &mut SelectorConfig {
    &mut self.config
  }

  fn classify_axis(&self, left: f64, right: f64, axis: usize) -> Overlap {
    classify_interval(
      left,
      right,
      self.left_edge[axis],
      self.right_edge[axis],
      self.config.domain_width()[axis],
      self.config.periodicity()[axis],
    )
  }
}

impl Selector for RegionSelector {
  fn config(&self) -> &SelectorConfig {
    &self.config
  }

  fn select_point(&self, pos: DVec3) -> Overlap {
    let width = self.config.domain_width();
    let periodicity = self.config.periodicity();
    let inside = (0..3).all(|axis| {
      axis_shifts(width[axis], periodicity[axis]).into_iter().any(|shift| {
        let p = pos[axis] + shift;
        p >= self.left_edge[axis] && p < self.right_edge[axis]
      })
    });
    if inside {
      Overlap::Full
    } else {
      Overlap::None
    }
  }

  fn select_sphere(&self, pos: DVec3, radius: f64) -> Overlap {
    let axes = [0, 1, 2].map(|axis| self.classify_axis(pos[axis] - radius, pos[axis] + radius, axis));
    let res = Overlap::combine_axes(axes);
    if res != Overlap::Partial {
      return res;
    }
    // The bounding cube overlaps; the sphere itself may still miss a corner.
    let half = (self.right_edge - self.left_edge) * 0.5;
    let center = (self.left_edge + self.right_edge) * 0.5;
    let rel = self.config.periodic_offset(pos, center);
    let closest = rel - rel.clamp(-half, half);
    if closest.length_squared() > radius * radius {
      Overlap::None
    } else {
      Overlap::Partial
    }
  }

  fn select_bbox(&self, left_edge: DVec3, right_edge: DVec3) -> Overlap {
    Overlap::combine_axes([0, 1, 2].map(|axis| self.classify_axis(left_edge[axis], right_edge[axis], axis)))
  }
}

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;
