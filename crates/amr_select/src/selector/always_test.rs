use super::*;
use crate::grid::{CellMask, ChildMask};

/// Points, spheres, boxes and cells anywhere are fully selected.
#[test]
fn test_selects_everything() {
  let sel = AlwaysSelector::default();
  let far = DVec3::splat(1.0e9);

  assert_eq!(sel.select_point(far), Overlap::Full);
  assert_eq!(sel.select_point(-far), Overlap::Full);
  assert_eq!(sel.select_sphere(far, 0.0), Overlap::Full);
  assert_eq!(sel.select_bbox(-far, far), Overlap::Full);
  assert_eq!(sel.select_cell(far, DVec3::splat(1.0e-6)), Overlap::Full);
}

/// Grid predicate ignores level bounds; traversal applies them instead.
#[test]
fn test_select_grid_any_level() {
  let config = SelectorConfig::default().with_levels(2, 3).unwrap();
  let sel = AlwaysSelector::new(config);
  for level in [0, 2, 3, 10] {
    assert_eq!(
      sel.select_grid(DVec3::ZERO, DVec3::ONE, level, None),
      Overlap::Full,
      "level {}",
      level
    );
  }
  assert!(!sel.level_in_bounds(0));
  assert!(sel.level_in_bounds(2));
}

/// Mask filling still honours level bounds and the child mask.
#[test]
fn test_fill_mask_respects_children_and_levels() {
  let config = SelectorConfig::default().with_levels(0, 2).unwrap();
  let sel = AlwaysSelector::new(config);
  let dims = [2, 2, 2];
  let mut child_mask = ChildMask::all_leaves(dims);
  child_mask.mark_covered(1, 1, 1);

  let mut mask = CellMask::new(dims);
  let total = sel
    .fill_mask_selector(DVec3::ZERO, DVec3::ONE, DVec3::splat(0.5), dims, &child_mask, &mut mask, 1)
    .unwrap();
  assert_eq!(total, 7);
  assert!(!mask.get(1, 1, 1));

  let mut out_of_range = CellMask::new(dims);
  let total = sel
    .fill_mask_selector(DVec3::ZERO, DVec3::ONE, DVec3::splat(0.5), dims, &child_mask, &mut out_of_range, 3)
    .unwrap();
  assert_eq!(total, 0);
  assert_eq!(out_of_range.count(), 0);
}

/// Level bounds can be reset before use and are re-validated.
#[test]
fn test_config_mut_revalidates() {
  let mut sel = AlwaysSelector::default();
  sel.config_mut().set_level_bounds(1, 1).unwrap();
  assert_eq!(sel.config().min_level(), 1);
  assert!(sel.config_mut().set_level_bounds(2, 1).is_err());
}
