//! Oct - in-memory octree node with up to eight children.

use crate::selector::DomainOwned;

/// Node shape the traversal engine needs: an owner and optional children,
/// one per octant.
pub trait OctNode: DomainOwned {
  fn child(&self, octant: u8) -> Option<&Self>;

  fn has_children(&self) -> bool {
    (0..8).any(|octant| self.child(octant).is_some())
  }
}

/// Oct with eight cells, each either a leaf or refined into a child oct.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Oct {
  /// Owning domain.
  pub domain_id: u64,
  children: [Option<Box<Oct>>; 8],
}

impl Oct {
  /// Oct whose eight cells are all leaves.
  pub fn leaf(domain_id: u64) -> Self {
    Self {
      domain_id,
      children: Default::default(),
    }
  }

  /// Fully refined tree with `depth` levels of octs below this one.
  pub fn uniform(depth: u32, domain_id: u64) -> Self {
    let mut oct = Self::leaf(domain_id);
    if depth > 0 {
      for octant in 0..8 {
        oct.set_child(octant, Self::uniform(depth - 1, domain_id));
      }
    }
    oct
  }

  /// Refine the cell at `octant`, creating a leaf child owned by the same
  /// domain if none exists, and return the child.
  pub fn refine(&mut self, octant: u8) -> &mut Oct {
    let domain_id = self.domain_id;
    self.children[octant as usize].get_or_insert_with(|| Box::new(Oct::leaf(domain_id)))
  }

  pub fn set_child(&mut self, octant: u8, child: Oct) {
    self.children[octant as usize] = Some(Box::new(child));
  }

  pub fn child_mut(&mut self, octant: u8) -> Option<&mut Oct> {
    self.children[octant as usize].as_deref_mut()
  }

  /// Number of leaf cells (cells without a child) in this subtree.
  pub fn leaf_count(&self) -> usize {
    self
      .children
      .iter()
      .map(|child| child.as_ref().map_or(1, |c| c.leaf_count()))
      .sum()
  }

  /// Leaf cells per oct level, index = level of the oct holding the cell
  /// relative to this one.
  pub fn leaf_count_per_level(&self) -> Vec<usize> {
    let mut counts = Vec::new();
    self.accumulate_leaves(0, &mut counts);
    counts
  }

  fn accumulate_leaves(&self, depth: usize, counts: &mut Vec<usize>) {
    if counts.len() <= depth {
      counts.resize(depth + 1, 0);
    }
    for child in &self.children {
      match child {
        Some(c) => c.accumulate_leaves(depth + 1, counts),
        None => counts[depth] += 1,
      }
    }
  }

  /// Number of octs in this subtree, this one included.
  pub fn oct_count(&self) -> usize {
    1 + self
      .children
      .iter()
      .flatten()
      .map(|c| c.oct_count())
      .sum::<usize>()
  }
}

impl DomainOwned for Oct {
  fn domain_id(&self) -> u64 {
    self.domain_id
  }
}

impl OctNode for Oct {
  #[inline]
  fn child(&self, octant: u8) -> Option<&Self> {
    self.children[octant as usize].as_deref()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_leaf_has_eight_cells() {
    let oct = Oct::leaf(0);
    assert!(!oct.has_children());
    assert_eq!(oct.leaf_count(), 8);
    assert_eq!(oct.oct_count(), 1);
  }

  #[test]
  fn test_uniform_counts() {
    let oct = Oct::uniform(2, 3);
    assert_eq!(oct.leaf_count(), 512);
    assert_eq!(oct.oct_count(), 1 + 8 + 64);
    assert_eq!(oct.leaf_count_per_level(), vec![0, 0, 512]);
    assert_eq!(oct.child(5).unwrap().domain_id(), 3);
  }

  #[test]
  fn test_refine_is_idempotent() {
    let mut oct = Oct::leaf(1);
    oct.refine(2).refine(7);
    oct.refine(2);
    assert_eq!(oct.oct_count(), 3);
    assert_eq!(oct.leaf_count(), 7 + 7 + 8);
    assert_eq!(oct.leaf_count_per_level(), vec![7, 7, 8]);
  }

  #[test]
  fn test_child_mut_and_domain() {
    let mut oct = Oct::leaf(1);
    oct.set_child(4, Oct::leaf(9));
    oct.child_mut(4).unwrap().domain_id = 11;
    assert_eq!(oct.child(4).unwrap().domain_id(), 11);
    assert!(oct.child_mut(0).is_none());
  }
}
