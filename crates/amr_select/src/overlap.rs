//! Overlap classification returned by every geometric predicate.

/// How a tested object relates to the selected region.
///
/// The integer encoding is stable and exposed through [`Overlap::as_i8`].
#[repr(i8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overlap {
  /// Geometry overlaps but the node belongs to another domain. The node is
  /// not selected itself; its children may still be.
  Foreign = -1,
  /// No overlap.
  #[default]
  None = 0,
  /// Entirely inside the region.
  Full = 1,
  /// Overlaps the region without being contained by it.
  Partial = 2,
}

impl Overlap {
  /// True for `Full` and `Partial`.
  #[inline]
  pub fn is_selected(self) -> bool {
    matches!(self, Overlap::Full | Overlap::Partial)
  }

  /// True unless the object lies completely outside the region.
  #[inline]
  pub fn intersects(self) -> bool {
    self != Overlap::None
  }

  #[inline]
  pub fn as_i8(self) -> i8 {
    self as i8
  }

  /// Decode the integer form. Unknown values map to `None`.
  pub fn from_i8(value: i8) -> Option<Self> {
    match value {
      -1 => Some(Overlap::Foreign),
      0 => Some(Overlap::None),
      1 => Some(Overlap::Full),
      2 => Some(Overlap::Partial),
      _ => None,
    }
  }

  /// `Partial` on a hit, `None` otherwise. Used by shapes with no volume,
  /// which can never contain a box.
  #[inline]
  pub fn partial_if(hit: bool) -> Self {
    if hit {
      Overlap::Partial
    } else {
      Overlap::None
    }
  }

  /// Combine per-axis classifications of a box: any miss is a miss, all
  /// contained is contained, anything else is partial.
  pub fn combine_axes(axes: [Overlap; 3]) -> Self {
    if axes.iter().any(|a| *a == Overlap::None) {
      Overlap::None
    } else if axes.iter().all(|a| *a == Overlap::Full) {
      Overlap::Full
    } else {
      Overlap::Partial
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_encoding_roundtrip() {
    for o in [Overlap::Foreign, Overlap::None, Overlap::Full, Overlap::Partial] {
      assert_eq!(Overlap::from_i8(o.as_i8()), Some(o));
    }
    assert_eq!(Overlap::from_i8(7), None);
  }

  #[test]
  fn test_is_selected() {
    assert!(Overlap::Full.is_selected());
    assert!(Overlap::Partial.is_selected());
    assert!(!Overlap::None.is_selected());
    assert!(!Overlap::Foreign.is_selected());
    assert!(Overlap::Foreign.intersects());
  }

  #[test]
  fn test_combine_axes() {
    use Overlap::*;
    assert_eq!(Overlap::combine_axes([Full, Full, Full]), Full);
    assert_eq!(Overlap::combine_axes([Full, Partial, Full]), Partial);
    assert_eq!(Overlap::combine_axes([Full, Partial, None]), None);
  }
}
