use std::collections::HashSet;

use super::*;

// =========================================================================
// OctKey Tests
// =========================================================================

/// Child key should have level + 1 (finer detail).
#[test]
fn test_child_is_finer() {
  let parent = OctKey::new(1, 2, 3, 4);
  assert_eq!(parent.child(0).level, 5);
}

/// All 8 octants (0-7) produce distinct children with correct coordinates.
///
/// child.x = parent.x * 2 + (octant & 1)
/// child.y = parent.y * 2 + ((octant >> 1) & 1)
/// child.z = parent.z * 2 + ((octant >> 2) & 1)
#[test]
fn test_child_all_8_octants() {
  let parent = OctKey::new(3, 4, 5, 2);
  let mut seen = HashSet::new();

  for octant in 0u8..8 {
    let child = parent.child(octant);
    assert_eq!(child.x, parent.x * 2 + (octant & 1) as u32, "octant {} X", octant);
    assert_eq!(child.y, parent.y * 2 + ((octant >> 1) & 1) as u32, "octant {} Y", octant);
    assert_eq!(child.z, parent.z * 2 + ((octant >> 2) & 1) as u32, "octant {} Z", octant);
    assert!(seen.insert(child), "octant {} duplicated", octant);
  }
}

/// Roots have no parent.
#[test]
fn test_root_has_no_parent() {
  assert!(OctKey::root(2, 0, 1).parent().is_none());
}

/// parent(child(key, octant)) == key, and the octant is recoverable.
#[test]
fn test_child_parent_roundtrip() {
  let original = OctKey::new(7, 8, 9, 3);
  for octant in 0u8..8 {
    let child = original.child(octant);
    assert_eq!(child.parent(), Some(original));
    assert_eq!(child.octant_in_parent(), octant);
  }
}

/// Child Morton index is the parent's shifted by three bits plus the octant.
#[test]
fn test_morton_nests_by_octant() {
  let parent = OctKey::new(5, 1, 6, 3);
  for octant in 0u8..8 {
    assert_eq!(
      parent.child(octant).morton(),
      (parent.morton() << 3) | octant as u64,
      "octant {}",
      octant
    );
  }
}

#[test]
fn test_octant_offset() {
  assert_eq!(octant_offset(0), [0, 0, 0]);
  assert_eq!(octant_offset(1), [1, 0, 0]);
  assert_eq!(octant_offset(2), [0, 1, 0]);
  assert_eq!(octant_offset(4), [0, 0, 1]);
  assert_eq!(octant_offset(7), [1, 1, 1]);
}
