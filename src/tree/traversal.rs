//! Lazy depth-first traversals
//!
//! Each iterator owns an explicit stack of slot handles, so no state
//! survives between calls and a clone resumes from the same position.
//! Stack depth: O(height), never O(len).

use std::fmt;
use std::iter::FusedIterator;

use super::{IndexedBst, Node, SlotIndex};
use crate::{Result, TreeError};

/// In-order walk: left subtree, node, right subtree
#[derive(Debug, Clone)]
pub struct InOrder<'a, K> {
    slots: &'a [Node<K>],
    stack: Vec<SlotIndex>,
    /// Next subtree whose left spine has not been pushed yet
    descend: Option<SlotIndex>,
}

impl<'a, K> InOrder<'a, K> {
    fn new(slots: &'a [Node<K>], start: Option<SlotIndex>) -> Self {
        Self {
            slots,
            stack: Vec::new(),
            descend: start,
        }
    }
}

impl<K: Copy> Iterator for InOrder<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some(slot) = self.descend {
            self.stack.push(slot);
            self.descend = self.slots[slot.get()].left;
        }

        let slot = self.stack.pop()?;
        let node = &self.slots[slot.get()];
        self.descend = node.right;
        Some(node.key)
    }
}

impl<K: Copy> FusedIterator for InOrder<'_, K> {}

/// Pre-order walk: node, left subtree, right subtree
#[derive(Debug, Clone)]
pub struct PreOrder<'a, K> {
    slots: &'a [Node<K>],
    stack: Vec<SlotIndex>,
}

impl<K: Copy> Iterator for PreOrder<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let slot = self.stack.pop()?;
        let node = &self.slots[slot.get()];
        // Right first so the left subtree pops next
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(node.key)
    }
}

impl<K: Copy> FusedIterator for PreOrder<'_, K> {}

/// Post-order walk: left subtree, right subtree, node
#[derive(Debug, Clone)]
pub struct PostOrder<'a, K> {
    slots: &'a [Node<K>],
    /// `(slot, children_pushed)`
    stack: Vec<(SlotIndex, bool)>,
}

impl<K: Copy> Iterator for PostOrder<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        loop {
            let (slot, expanded) = self.stack.pop()?;
            let node = &self.slots[slot.get()];
            if expanded {
                return Some(node.key);
            }
            self.stack.push((slot, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
    }
}

impl<K: Copy> FusedIterator for PostOrder<'_, K> {}

impl<K: Ord + Copy + fmt::Debug> IndexedBst<K> {
    /// Keys of the subtree at `index` in ascending order
    pub fn in_order(&self, index: SlotIndex) -> Result<InOrder<'_, K>> {
        self.check_slot(index)?;
        Ok(InOrder::new(&self.slots, Some(index)))
    }

    /// Keys of the subtree at `index`, each node before its children
    pub fn pre_order(&self, index: SlotIndex) -> Result<PreOrder<'_, K>> {
        self.check_slot(index)?;
        Ok(PreOrder {
            slots: &self.slots,
            stack: vec![index],
        })
    }

    /// Keys of the subtree at `index`, each node after its children
    pub fn post_order(&self, index: SlotIndex) -> Result<PostOrder<'_, K>> {
        self.check_slot(index)?;
        Ok(PostOrder {
            slots: &self.slots,
            stack: vec![(index, false)],
        })
    }

    /// All keys in ascending order
    pub fn tree_sort(&self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.slots.len());
        sorted.extend(self);
        sorted
    }

    /// Write all keys in ascending order into `out`
    ///
    /// Entries past the last key are reset to `K::default()`.
    /// Returns the number of keys written.
    pub fn tree_sort_into(&self, out: &mut [K]) -> Result<usize>
    where
        K: Default,
    {
        if out.len() < self.slots.len() {
            return Err(TreeError::BufferTooSmall {
                required: self.slots.len(),
                provided: out.len(),
            });
        }

        let mut written = 0;
        for (entry, key) in out.iter_mut().zip(self) {
            *entry = key;
            written += 1;
        }
        out[written..].fill(K::default());
        Ok(written)
    }
}

impl<'a, K: Copy> IntoIterator for &'a IndexedBst<K> {
    type Item = K;
    type IntoIter = InOrder<'a, K>;

    /// Ascending walk from the root; empty for an empty tree
    fn into_iter(self) -> InOrder<'a, K> {
        let start = (!self.slots.is_empty()).then_some(SlotIndex::ROOT);
        InOrder::new(&self.slots, start)
    }
}
