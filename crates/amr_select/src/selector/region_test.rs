use super::*;
use crate::config::DomainInfo;

fn region(left: DVec3, right: DVec3, periodic: bool) -> RegionSelector {
  let domain = if periodic {
    DomainInfo::unit_periodic()
  } else {
    DomainInfo::unit()
  };
  RegionSelector::new(SelectorConfig::new(domain).unwrap(), left, right).unwrap()
}

#[test]
fn test_inverted_region_rejected() {
  let err = RegionSelector::new(
    SelectorConfig::default(),
    DVec3::new(0.0, 0.5, 0.0),
    DVec3::new(1.0, 0.25, 1.0),
  )
  .unwrap_err();
  assert_eq!(err, SelectorError::InvalidRegion { axis: 1 });
}

/// Points use half-open containment.
#[test]
fn test_select_point_half_open() {
  let r = region(DVec3::splat(0.25), DVec3::splat(0.75), false);
  assert_eq!(r.select_point(DVec3::splat(0.5)), Overlap::Full);
  assert_eq!(r.select_point(DVec3::splat(0.25)), Overlap::Full);
  assert_eq!(r.select_point(DVec3::splat(0.75)), Overlap::None);
}

#[test]
fn test_select_bbox_classification() {
  let r = region(DVec3::splat(0.25), DVec3::splat(0.75), false);
  assert_eq!(
    r.select_bbox(DVec3::splat(0.3), DVec3::splat(0.6)),
    Overlap::Full
  );
  assert_eq!(
    r.select_bbox(DVec3::splat(0.5), DVec3::splat(1.0)),
    Overlap::Partial
  );
  assert_eq!(
    r.select_bbox(DVec3::splat(0.8), DVec3::splat(1.0)),
    Overlap::None
  );
  // Sharing only a face is not an overlap.
  assert_eq!(
    r.select_bbox(DVec3::new(0.75, 0.3, 0.3), DVec3::new(1.0, 0.6, 0.6)),
    Overlap::None
  );
}

/// A box hanging off the right edge of a periodic domain wraps onto a
/// region at the left edge.
#[test]
fn test_select_bbox_periodic_wrap() {
  let left = DVec3::new(0.0, 0.25, 0.25);
  let right = DVec3::new(0.1, 0.75, 0.75);
  let plain = region(left, right, false);
  let wrapped = region(left, right, true);

  let box_left = DVec3::new(0.95, 0.3, 0.3);
  let box_right = DVec3::new(1.05, 0.6, 0.6);
  assert_eq!(plain.select_bbox(box_left, box_right), Overlap::None);
  assert_eq!(wrapped.select_bbox(box_left, box_right), Overlap::Partial);
  assert_eq!(plain.select_point(DVec3::new(1.05, 0.5, 0.5)), Overlap::None);
  assert_eq!(wrapped.select_point(DVec3::new(1.05, 0.5, 0.5)), Overlap::Full);
}

#[test]
fn test_select_sphere() {
  let r = region(DVec3::splat(0.25), DVec3::splat(0.75), false);
  assert_eq!(r.select_sphere(DVec3::splat(0.5), 0.1), Overlap::Full);
  assert_eq!(r.select_sphere(DVec3::new(0.8, 0.5, 0.5), 0.1), Overlap::Partial);
  // Bounding cube touches the corner region but the sphere does not.
  assert_eq!(r.select_sphere(DVec3::splat(0.82), 0.1), Overlap::None);
}
