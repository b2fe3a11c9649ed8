//! Axis-aligned cell boxes and periodic interval classification.

use glam::DVec3;
use smallvec::SmallVec;

use crate::overlap::Overlap;

/// Double-precision axis-aligned box of a cell, grid patch or oct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBox {
	/// Left edge (minimum corner).
	pub left: DVec3,
	/// Right edge (maximum corner).
	pub right: DVec3,
}

impl CellBox {
	/// Create a box from its edges.
	///
	/// # Panics
	/// Debug-asserts that left <= right on all axes.
	pub fn new(left: DVec3, right: DVec3) -> Self {
		debug_assert!(
			left.x <= right.x && left.y <= right.y && left.z <= right.z,
			"box left edge must be <= right edge on all axes"
		);
		Self { left, right }
	}

	/// Box of a cell given its center and width.
	#[inline]
	pub fn from_center(center: DVec3, width: DVec3) -> Self {
		let half = width * 0.5;
		Self {
			left: center - half,
			right: center + half,
		}
	}

	/// Grow the box by `pad` on every side.
	#[inline]
	pub fn padded(&self, pad: DVec3) -> Self {
		Self {
			left: self.left - pad,
			right: self.right + pad,
		}
	}

	#[inline]
	pub fn width(&self) -> DVec3 {
		self.right - self.left
	}

	#[inline]
	pub fn center(&self) -> DVec3 {
		(self.left + self.right) * 0.5
	}

	/// All eight corners, octant order (bit 0 = +x, bit 1 = +y, bit 2 = +z).
	pub fn corners(&self) -> [DVec3; 8] {
		std::array::from_fn(|octant| {
			DVec3::new(
				if octant & 1 == 0 { self.left.x } else { self.right.x },
				if octant & 2 == 0 { self.left.y } else { self.right.y },
				if octant & 4 == 0 { self.left.z } else { self.right.z },
			)
		})
	}
}

/// Shifts to try on one axis: the box itself plus its wrapped copies one
/// domain width to either side when the axis is periodic.
#[inline]
pub fn axis_shifts(width: f64, periodic: bool) -> SmallVec<[f64; 3]> {
	let mut shifts = SmallVec::new();
	shifts.push(0.0);
	if periodic {
		shifts.push(-width);
		shifts.push(width);
	}
	shifts
}

/// Classify the interval `[left, right]` against the region interval
/// `[region_left, region_right]` on one axis.
///
/// Touching endpoints do not count as overlap. On periodic axes every
/// wrapped copy of the interval is tried and the strongest result kept.
pub fn classify_interval(
	left: f64,
	right: f64,
	region_left: f64,
	region_right: f64,
	width: f64,
	periodic: bool,
) -> Overlap {
	let mut best = Overlap::None;
	for shift in axis_shifts(width, periodic) {
		let (l, r) = (left + shift, right + shift);
		if l >= region_right || r <= region_left {
			continue;
		}
		if l >= region_left && r <= region_right {
			return Overlap::Full;
		}
		best = Overlap::Partial;
	}
	best
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_center() {
		let b = CellBox::from_center(DVec3::splat(1.0), DVec3::splat(0.5));
		assert_eq!(b.left, DVec3::splat(0.75));
		assert_eq!(b.right, DVec3::splat(1.25));
		assert_eq!(b.center(), DVec3::splat(1.0));
		assert_eq!(b.width(), DVec3::splat(0.5));
	}

	#[test]
	fn test_padded() {
		let b = CellBox::new(DVec3::ZERO, DVec3::ONE).padded(DVec3::splat(0.5));
		assert_eq!(b.left, DVec3::splat(-0.5));
		assert_eq!(b.right, DVec3::splat(1.5));
	}

	#[test]
	fn test_corners_octant_order() {
		let b = CellBox::new(DVec3::ZERO, DVec3::ONE);
		let corners = b.corners();
		assert_eq!(corners[0], DVec3::ZERO);
		assert_eq!(corners[1], DVec3::new(1.0, 0.0, 0.0));
		assert_eq!(corners[2], DVec3::new(0.0, 1.0, 0.0));
		assert_eq!(corners[4], DVec3::new(0.0, 0.0, 1.0));
		assert_eq!(corners[7], DVec3::ONE);
	}

	#[test]
	fn test_classify_interval_plain() {
		assert_eq!(classify_interval(0.2, 0.4, 0.0, 1.0, 1.0, false), Overlap::Full);
		assert_eq!(classify_interval(-0.2, 0.4, 0.0, 1.0, 1.0, false), Overlap::Partial);
		assert_eq!(classify_interval(1.2, 1.4, 0.0, 1.0, 1.0, false), Overlap::None);
	}

	#[test]
	fn test_classify_interval_touching_is_none() {
		assert_eq!(classify_interval(1.0, 2.0, 0.0, 1.0, 10.0, false), Overlap::None);
		assert_eq!(classify_interval(-1.0, 0.0, 0.0, 1.0, 10.0, false), Overlap::None);
	}

	#[test]
	fn test_classify_interval_wrapped_copy() {
		// [9.5, 10.5] wraps onto [-0.5, 0.5] which overlaps [0, 1].
		assert_eq!(classify_interval(9.5, 10.5, 0.0, 1.0, 10.0, true), Overlap::Partial);
		assert_eq!(classify_interval(9.5, 10.5, 0.0, 1.0, 10.0, false), Overlap::None);
		// [10.2, 10.4] wraps fully inside.
		assert_eq!(classify_interval(10.2, 10.4, 0.0, 1.0, 10.0, true), Overlap::Full);
	}
}
