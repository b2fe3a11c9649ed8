//! CellMask / ChildMask - dense 3-D boolean arrays over a grid's cells.
//!
//! # Memory Layout
//!
//! ```text
//! Row-major, Z innermost:
//!
//! index = (i * ny + j) * nz + k
//! ```

/// Dense 3-D boolean array with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
  dims: [usize; 3],
  cells: Vec<bool>,
}

impl CellMask {
  /// All-false mask of the given dimensions.
  pub fn new(dims: [usize; 3]) -> Self {
    Self {
      dims,
      cells: vec![false; dims[0] * dims[1] * dims[2]],
    }
  }

  /// Mask filled by evaluating `f(i, j, k)` in storage order.
  pub fn from_fn(dims: [usize; 3], mut f: impl FnMut(usize, usize, usize) -> bool) -> Self {
    let mut cells = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
    for i in 0..dims[0] {
      for j in 0..dims[1] {
        for k in 0..dims[2] {
          cells.push(f(i, j, k));
        }
      }
    }
    Self { dims, cells }
  }

  #[inline]
  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Flat index of cell `(i, j, k)`.
  #[inline]
  pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
    debug_assert!(i < self.dims[0] && j < self.dims[1] && k < self.dims[2]);
    (i * self.dims[1] + j) * self.dims[2] + k
  }

  #[inline]
  pub fn get(&self, i: usize, j: usize, k: usize) -> bool {
    self.cells[self.index(i, j, k)]
  }

  #[inline]
  pub fn set(&mut self, i: usize, j: usize, k: usize, value: bool) {
    let idx = self.index(i, j, k);
    self.cells[idx] = value;
  }

  /// Value at a flat index.
  #[inline]
  pub fn get_flat(&self, index: usize) -> bool {
    self.cells[index]
  }

  /// Number of true cells.
  pub fn count(&self) -> usize {
    self.cells.iter().filter(|&&c| c).count()
  }

  /// Cells in storage order.
  pub fn as_slice(&self) -> &[bool] {
    &self.cells
  }
}

/// Per-cell flags marking cells whose volume is represented by a finer
/// child grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildMask {
  covered: CellMask,
}

impl ChildMask {
  /// No cell is covered by a child.
  pub fn all_leaves(dims: [usize; 3]) -> Self {
    Self {
      covered: CellMask::new(dims),
    }
  }

  /// Wrap a mask whose true cells are covered by children.
  pub fn from_covered(covered: CellMask) -> Self {
    Self { covered }
  }

  #[inline]
  pub fn dims(&self) -> [usize; 3] {
    self.covered.dims()
  }

  #[inline]
  pub fn is_covered(&self, i: usize, j: usize, k: usize) -> bool {
    self.covered.get(i, j, k)
  }

  pub fn mark_covered(&mut self, i: usize, j: usize, k: usize) {
    self.covered.set(i, j, k, true);
  }

  /// Mark every cell inside the index box `[lo, hi)` as covered.
  pub fn mark_covered_range(&mut self, lo: [usize; 3], hi: [usize; 3]) {
    for i in lo[0]..hi[0] {
      for j in lo[1]..hi[1] {
        for k in lo[2]..hi[2] {
          self.covered.set(i, j, k, true);
        }
      }
    }
  }

  /// Number of covered cells.
  pub fn covered_count(&self) -> usize {
    self.covered.count()
  }
}
