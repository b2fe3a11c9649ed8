//! MortonMask - per-level compressed bitsets of selected octree cells.
//!
//! Level `l` divides the domain into `2^l` cells per axis; a cell is keyed by
//! the Morton index of its integer coordinates at that level. Each level
//! stores only the cells the selection resolved there: a cell fully inside
//! the region is stored at the level where that was first known and
//! implies all its descendants, while partially covered cells are split
//! until `max_level`.
//!
//! Masks are kept in one canonical form: no cell is stored under a stored
//! ancestor, and eight stored siblings are replaced by their parent. Two
//! masks covering the same cells therefore compare equal however they were
//! built.

use std::collections::BTreeMap;

use glam::DVec3;
use rayon::prelude::*;
use roaring::RoaringTreemap;

use super::MAX_LEVEL;
use crate::bounds::CellBox;
use crate::error::{Result, SelectorError};
use crate::octree::{octant_offset, OctKey};
use crate::overlap::Overlap;
use crate::selector::Selector;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MortonMask {
  levels: BTreeMap<u32, RoaringTreemap>,
}

impl MortonMask {
  pub fn new() -> Self {
    Self::default()
  }

  /// Select over the whole domain, refining partially covered cells down
  /// to `max_level`. `ngz` pads every tested cell by that many cells of the
  /// finest level.
  pub fn build<S>(selector: &S, domain_left: DVec3, domain_width: DVec3, max_level: u32, ngz: u32) -> Result<Self>
  where
    S: Selector + ?Sized,
  {
    Self::build_subtree(selector, domain_left, domain_width, OctKey::root(0, 0, 0), max_level, ngz)
  }

  /// Select within the cell addressed by `key` only.
  #[tracing::instrument(skip_all, name = "morton::build", fields(level = key.level, max_level = max_level))]
  pub fn build_subtree<S>(
    selector: &S,
    domain_left: DVec3,
    domain_width: DVec3,
    key: OctKey,
    max_level: u32,
    ngz: u32,
  ) -> Result<Self>
  where
    S: Selector + ?Sized,
  {
    let (pos, dds) = subtree_cell(domain_left, domain_width, key, max_level)?;
    let mut mask = Self::new();
    recursive_morton_mask(selector, key.level as u32, pos, dds, max_level, key.morton(), &mut mask, ngz);
    mask.normalize();
    tracing::debug!(levels = mask.levels.len(), cells = mask.len(), "morton mask built");
    Ok(mask)
  }

  /// [`MortonMask::build`] with the eight level-1 subtrees built on the
  /// rayon pool. Gives the same mask as the sequential build.
  pub fn par_build<S>(selector: &S, domain_left: DVec3, domain_width: DVec3, max_level: u32, ngz: u32) -> Result<Self>
  where
    S: Selector + ?Sized,
  {
    let root = OctKey::root(0, 0, 0);
    let (pos, dds) = subtree_cell(domain_left, domain_width, root, max_level)?;
    let splits = max_level > 0 && classify_cell(selector, 0, pos, dds, max_level, ngz) == Overlap::Partial;
    if !splits {
      return Self::build(selector, domain_left, domain_width, max_level, ngz);
    }

    let parts = (0..8u8)
      .into_par_iter()
      .map(|octant| Self::build_subtree(selector, domain_left, domain_width, root.child(octant), max_level, ngz))
      .collect::<Result<Vec<_>>>()?;
    let mut mask = Self::new();
    for part in &parts {
      mask.merge(part);
    }
    Ok(mask)
  }

  /// Set a cell, creating its level on first use. Returns false if it was
  /// already set.
  pub fn insert(&mut self, level: u32, index: u64) -> bool {
    self.levels.entry(level).or_default().insert(index)
  }

  pub fn level(&self, level: u32) -> Option<&RoaringTreemap> {
    self.levels.get(&level)
  }

  /// Non-empty levels, coarsest first.
  pub fn levels(&self) -> impl Iterator<Item = (u32, &RoaringTreemap)> {
    self.levels.iter().map(|(l, bits)| (*l, bits))
  }

  pub fn is_empty(&self) -> bool {
    self.levels.values().all(RoaringTreemap::is_empty)
  }

  /// Stored cells across all levels.
  pub fn len(&self) -> u64 {
    self.levels.values().map(RoaringTreemap::len).sum()
  }

  /// True when the cell or one of its ancestors is set. Levels deeper than
  /// [`MAX_LEVEL`] address no cell and return false.
  pub fn contains(&self, level: u32, index: u64) -> bool {
    if level > MAX_LEVEL {
      return false;
    }
    self
      .levels
      .range(..=level)
      .any(|(l, bits)| bits.contains(ancestor(index, level - l)))
  }

  /// Union in place.
  pub fn merge(&mut self, other: &MortonMask) {
    for (level, bits) in &other.levels {
      *self.levels.entry(*level).or_default() |= bits;
    }
    self.normalize();
  }

  /// Cells selected by both masks, each at the finer of the two levels it
  /// was resolved at.
  pub fn intersect(&self, other: &MortonMask) -> MortonMask {
    let mut out = MortonMask::new();
    for (a, b) in [(self, other), (other, self)] {
      for (level, bits) in &a.levels {
        for index in bits.iter().filter(|i| b.contains(*level, *i)) {
          out.insert(*level, index);
        }
      }
    }
    out.normalize();
    out
  }

  /// Every selected cell expanded to `max_level`. Cells stored finer than
  /// `max_level` map to their ancestor.
  pub fn leaf_cells(&self, max_level: u32) -> Result<RoaringTreemap> {
    if max_level > MAX_LEVEL {
      return Err(SelectorError::MortonDepth { max_level });
    }
    let mut out = RoaringTreemap::new();
    for (level, bits) in &self.levels {
      if *level <= max_level {
        let shift = 3 * (max_level - level);
        for index in bits {
          out.insert_range((index << shift)..((index + 1) << shift));
        }
      } else {
        out.extend(bits.iter().map(|index| ancestor(index, level - max_level)));
      }
    }
    Ok(out)
  }

  pub fn leaf_count(&self, max_level: u32) -> Result<u64> {
    Ok(self.leaf_cells(max_level)?.len())
  }

  /// Bytes needed to serialize every level: a 4-byte level tag plus the
  /// portable roaring encoding of its bitset.
  pub fn serialized_size(&self) -> usize {
    self
      .levels
      .values()
      .map(|bits| 4 + bits.serialized_size())
      .sum()
  }

  // Drop cells under a stored ancestor, then fold complete sibling groups
  // into their parent, finest level first so folds cascade upward.
  fn normalize(&mut self) {
    let levels: Vec<u32> = self.levels.keys().copied().collect();
    for &level in &levels {
      let Some(bits) = self.levels.get(&level) else {
        continue;
      };
      let redundant: Vec<u64> = bits
        .iter()
        .filter(|index| {
          self
            .levels
            .range(..level)
            .any(|(l, coarse)| coarse.contains(ancestor(*index, level - l)))
        })
        .collect();
      if let Some(bits) = self.levels.get_mut(&level) {
        for index in redundant {
          bits.remove(index);
        }
      }
    }

    let finest = levels.last().copied().unwrap_or(0);
    for level in (1..=finest).rev() {
      let Some(bits) = self.levels.get_mut(&level) else {
        continue;
      };
      let mut parents = Vec::new();
      let mut run = (u64::MAX, 0u8);
      for index in bits.iter() {
        let parent = index >> 3;
        run = if run.0 == parent { (parent, run.1 + 1) } else { (parent, 1) };
        if run.1 == 8 {
          parents.push(parent);
        }
      }
      if parents.is_empty() {
        continue;
      }
      for parent in &parents {
        bits.remove_range((parent << 3)..=((parent << 3) | 7));
      }
      self.levels.entry(level - 1).or_default().extend(parents);
    }
    self.levels.retain(|_, bits| !bits.is_empty());
  }
}

/// Classify the cell at `pos` (left corner) of width `dds` and record it.
///
/// The cell is tested like [`Selector::select_cell`], with the box further
/// grown by `ngz` cells of `max_level` on every side.
/// Full cells are stored at `level` and not refined; partial cells are
/// refined until `max_level`, where they are stored.
#[allow(clippy::too_many_arguments)]
pub fn recursive_morton_mask<S>(
  selector: &S,
  level: u32,
  pos: DVec3,
  dds: DVec3,
  max_level: u32,
  morton_index: u64,
  mask: &mut MortonMask,
  ngz: u32,
) where
  S: Selector + ?Sized,
{
  match classify_cell(selector, level, pos, dds, max_level, ngz) {
    Overlap::None | Overlap::Foreign => {}
    Overlap::Full => {
      mask.insert(level, morton_index);
    }
    Overlap::Partial if level >= max_level => {
      mask.insert(level, morton_index);
    }
    Overlap::Partial => {
      let half = dds * 0.5;
      for octant in 0..8u8 {
        let [ox, oy, oz] = octant_offset(octant);
        let child_pos = pos + DVec3::new(ox as f64, oy as f64, oz as f64) * half;
        let child_index = (morton_index << 3) | octant as u64;
        recursive_morton_mask(selector, level + 1, child_pos, half, max_level, child_index, mask, ngz);
      }
    }
  }
}

/// `select_cell` for the cell at `pos` (left corner), with the box further
/// grown by `ngz` cells of `max_level`.
fn classify_cell<S>(selector: &S, level: u32, pos: DVec3, dds: DVec3, max_level: u32, ngz: u32) -> Overlap
where
  S: Selector + ?Sized,
{
  let finest = dds / (1u64 << max_level.saturating_sub(level)) as f64;
  let tolerance = dds * selector.config().overlap_cells() as f64;
  let cell = CellBox::new(pos, pos + dds).padded(tolerance + finest * ngz as f64);
  selector.select_bbox(cell.left, cell.right)
}

/// Index of the ancestor `levels_up` levels above `index`.
#[inline]
fn ancestor(index: u64, levels_up: u32) -> u64 {
  index.checked_shr(levels_up.saturating_mul(3)).unwrap_or(0)
}

/// Left corner and width of the cell addressed by `key`.
fn subtree_cell(domain_left: DVec3, domain_width: DVec3, key: OctKey, max_level: u32) -> Result<(DVec3, DVec3)> {
  if max_level > MAX_LEVEL {
    return Err(SelectorError::MortonDepth { max_level });
  }
  let per_axis = 1u64 << key.level.clamp(0, MAX_LEVEL as i32);
  let outside = [key.x, key.y, key.z].iter().any(|c| *c as u64 >= per_axis);
  if key.level < 0 || key.level as u32 > max_level || outside {
    return Err(SelectorError::KeyOutOfDomain {
      x: key.x,
      y: key.y,
      z: key.z,
      level: key.level,
      max_level,
    });
  }
  let dds = domain_width / per_axis as f64;
  let pos = domain_left + DVec3::new(key.x as f64, key.y as f64, key.z as f64) * dds;
  Ok((pos, dds))
}

#[cfg(test)]
#[path = "mask_test.rs"]
mod mask_test;
