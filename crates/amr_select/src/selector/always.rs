//! AlwaysSelector - every predicate reports full containment.

use glam::DVec3;

use super::{DomainOwned, Selector};
use crate::config::SelectorConfig;
use crate::overlap::Overlap;

/// Selects everything at every level.
///
/// Level bounds are still validated in the config; the traversal engines
/// apply them when deciding which cells to report.
#[derive(Clone, Debug, Default)]
pub struct AlwaysSelector {
  config: SelectorConfig,
}

impl AlwaysSelector {
  pub fn new(config: SelectorConfig) -> Self {
    Self { config }
  }

  pub fn config_mut(&mut self) -> &mut SelectorConfig {
    &mut self.config
  }
}

impl Selector for AlwaysSelector {
  fn config(&self) -> &SelectorConfig {
    &self.config
  }

  fn select_point(&self, _pos: DVec3) -> Overlap {
    Overlap::Full
  }

  fn select_sphere(&self, _pos: DVec3, _radius: f64) -> Overlap {
    Overlap::Full
  }

  fn select_bbox(&self, _left_edge: DVec3, _right_edge: DVec3) -> Overlap {
    Overlap::Full
  }

  fn select_cell(&self, _pos: DVec3, _dds: DVec3) -> Overlap {
    Overlap::Full
  }

  fn select_grid(
    &self,
    _left_edge: DVec3,
    _right_edge: DVec3,
    _level: i32,
    _node: Option<&dyn DomainOwned>,
  ) -> Overlap {
    Overlap::Full
  }
}

#[cfg(test)]
#[path = "always_test.rs"]
mod always_test;
