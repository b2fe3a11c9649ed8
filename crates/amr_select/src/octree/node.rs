//! OctKey - integer address of an oct or cell in the octree.
//!
//! Keys are identified by their integer coordinates at their own level.
//! Level 0 = coarsest (root octs), higher level = finer.

use crate::morton;

/// Integer address - immutable value type.
///
/// Coordinates count cells of the key's own level from the domain's left
/// edge, so a child's coordinates are its parent's doubled plus the octant
/// bit on each axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct OctKey {
  /// X index at this level
  pub x: u32,
  /// Y index at this level
  pub y: u32,
  /// Z index at this level
  pub z: u32,
  /// Refinement level (0 = coarsest)
  pub level: i32,
}

impl OctKey {
  pub fn new(x: u32, y: u32, z: u32, level: i32) -> Self {
    Self { x, y, z, level }
  }

  /// Key of a root oct.
  pub fn root(x: u32, y: u32, z: u32) -> Self {
    Self::new(x, y, z, 0)
  }

  /// Child key (finer: level + 1).
  ///
  /// Octant: 0-7 where bits represent +X, +Y, +Z offsets:
  /// - bit 0: X offset (0 or 1)
  /// - bit 1: Y offset (0 or 1)
  /// - bit 2: Z offset (0 or 1)
  #[inline]
  pub fn child(&self, octant: u8) -> Self {
    debug_assert!(octant < 8, "octant out of range");
    let [cx, cy, cz] = octant_offset(octant);
    Self {
      x: self.x * 2 + cx,
      y: self.y * 2 + cy,
      z: self.z * 2 + cz,
      level: self.level + 1,
    }
  }

  /// Parent key (coarser: level - 1).
  ///
  /// Returns None at level 0.
  pub fn parent(&self) -> Option<Self> {
    if self.level <= 0 {
      return None;
    }
    Some(Self {
      x: self.x / 2,
      y: self.y / 2,
      z: self.z / 2,
      level: self.level - 1,
    })
  }

  /// Which octant of its parent this key occupies.
  #[inline]
  pub fn octant_in_parent(&self) -> u8 {
    ((self.x & 1) | ((self.y & 1) << 1) | ((self.z & 1) << 2)) as u8
  }

  /// Morton (Z-order) index of this key among keys of the same level.
  #[inline]
  pub fn morton(&self) -> u64 {
    morton::encode(self.x, self.y, self.z)
  }
}

/// Per-axis offset (0 or 1) of an octant.
#[inline]
pub fn octant_offset(octant: u8) -> [u32; 3] {
  [
    (octant & 1) as u32,
    ((octant >> 1) & 1) as u32,
    ((octant >> 2) & 1) as u32,
  ]
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
