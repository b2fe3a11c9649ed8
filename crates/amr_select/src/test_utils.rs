//! Shared fixtures for unit tests.

use glam::DVec3;

use crate::config::{DomainInfo, SelectorConfig};
use crate::octree::{Oct, OctCell, OctKey};
use crate::selector::SphereSelector;

/// Unit cube, non-periodic, every level.
pub fn unit_config() -> SelectorConfig {
  SelectorConfig::new(DomainInfo::unit()).unwrap()
}

/// Sphere on the unit domain.
pub fn sphere(center: DVec3, radius: f64) -> SphereSelector {
  SphereSelector::new(unit_config(), center, radius).unwrap()
}

/// Root with octant 0 refined, and octant 7 of that child refined again.
///
/// Leaf cells: 7 at level 0, 7 at level 1, 8 at level 2.
pub fn three_level_oct() -> Oct {
  let mut root = Oct::leaf(0);
  root.refine(0).refine(7);
  root
}

/// Everything a visitor saw, in order.
#[derive(Default, Debug)]
pub struct Recorder {
  pub cells: Vec<(OctKey, u8, bool, bool)>,
}

impl Recorder {
  pub fn record(&mut self, cell: &OctCell, selected: bool) {
    self.cells.push((cell.oct_key, cell.octant, cell.covered, selected));
  }

  pub fn selected(&self) -> usize {
    self.cells.iter().filter(|c| c.3).count()
  }

  pub fn covered(&self) -> usize {
    self.cells.iter().filter(|c| c.2).count()
  }
}

impl<O: ?Sized> crate::octree::OctVisitor<O> for Recorder {
  fn visit(&mut self, _oct: &O, cell: &OctCell, selected: bool) {
    self.record(cell, selected);
  }
}
