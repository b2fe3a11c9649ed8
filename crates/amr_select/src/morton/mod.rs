//! Morton (Z-order) keys and level-indexed Morton masks.
//!
//! Bits interleave as `...z1 y1 x1 z0 y0 x0`, so the low three bits of a key
//! are the octant of the cell within its parent (bit 0 = +x, bit 1 = +y,
//! bit 2 = +z) and a child's key is `(parent << 3) | octant`.

pub mod mask;

pub use mask::{recursive_morton_mask, MortonMask};

/// Deepest level a 64-bit key can address (21 bits per axis).
pub const MAX_LEVEL: u32 = 21;

const AXIS_MASK: u64 = (1 << MAX_LEVEL) - 1;

/// Morton encode 3D coordinates into a single u64.
///
/// Each coordinate is limited to 21 bits.
#[inline]
pub fn encode(x: u32, y: u32, z: u32) -> u64 {
  debug_assert!((x as u64) <= AXIS_MASK, "x coordinate exceeds 21-bit limit");
  debug_assert!((y as u64) <= AXIS_MASK, "y coordinate exceeds 21-bit limit");
  debug_assert!((z as u64) <= AXIS_MASK, "z coordinate exceeds 21-bit limit");
  spread(x as u64) | (spread(y as u64) << 1) | (spread(z as u64) << 2)
}

/// Morton decode a u64 back to 3D coordinates.
#[inline]
pub fn decode(key: u64) -> [u32; 3] {
  [
    compact(key) as u32,
    compact(key >> 1) as u32,
    compact(key >> 2) as u32,
  ]
}

// Insert two zero bits between each of the low 21 bits.
#[inline]
fn spread(v: u64) -> u64 {
  let mut v = v & AXIS_MASK;
  v = (v | (v << 32)) & 0x001f_0000_0000_ffff;
  v = (v | (v << 16)) & 0x001f_0000_ff00_00ff;
  v = (v | (v << 8)) & 0x100f_00f0_0f00_f00f;
  v = (v | (v << 4)) & 0x10c3_0c30_c30c_30c3;
  v = (v | (v << 2)) & 0x1249_2492_4924_9249;
  v
}

#[inline]
fn compact(v: u64) -> u64 {
  let mut v = v & 0x1249_2492_4924_9249;
  v = (v | (v >> 2)) & 0x10c3_0c30_c30c_30c3;
  v = (v | (v >> 4)) & 0x100f_00f0_0f00_f00f;
  v = (v | (v >> 8)) & 0x001f_0000_ff00_00ff;
  v = (v | (v >> 16)) & 0x001f_0000_0000_ffff;
  v = (v | (v >> 32)) & AXIS_MASK;
  v
}
