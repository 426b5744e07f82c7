//! Key lookup and subtree extremes
//!
//! Both search forms stop on "no child in the direction of the key".
//! The iterative form additionally caps its loop at the number of
//! occupied slots and treats running out as corruption.

use std::cmp::Ordering;
use std::fmt;

use super::{IndexedBst, SlotIndex};
use crate::Result;

impl<K: Ord + Copy + fmt::Debug> IndexedBst<K> {
    /// Slot holding `key`, searched iteratively from the root
    pub fn find(&self, key: K) -> Result<Option<SlotIndex>> {
        if self.slots.is_empty() {
            return Ok(None);
        }

        let mut current = SlotIndex::ROOT;
        for _ in 0..self.slots.len() {
            let node = &self.slots[current.get()];
            let next = match key.cmp(&node.key) {
                Ordering::Equal => return Ok(Some(current)),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(slot) => current = slot,
                None => return Ok(None),
            }
        }

        Err(self.corruption("find"))
    }

    /// Slot holding `key`, searched recursively from the subtree at `index`
    pub fn find_recursive(&self, index: SlotIndex, key: K) -> Result<Option<SlotIndex>> {
        self.check_slot(index)?;
        Ok(self.find_from(index, key))
    }

    fn find_from(&self, index: SlotIndex, key: K) -> Option<SlotIndex> {
        let node = &self.slots[index.get()];
        match key.cmp(&node.key) {
            Ordering::Equal => Some(index),
            Ordering::Less => node.left.and_then(|left| self.find_from(left, key)),
            Ordering::Greater => node.right.and_then(|right| self.find_from(right, key)),
        }
    }

    /// Check if `key` is stored anywhere in the tree
    pub fn contains(&self, key: K) -> Result<bool> {
        self.find(key).map(|slot| slot.is_some())
    }

    /// Slot of the smallest key in the subtree at `index`
    pub fn min_in_subtree(&self, index: SlotIndex) -> Result<SlotIndex> {
        let mut current = index;
        let mut node = self.check_slot(index)?;
        while let Some(left) = node.left {
            current = left;
            node = &self.slots[left.get()];
        }
        Ok(current)
    }

    /// Slot of the largest key in the subtree at `index`
    pub fn max_in_subtree(&self, index: SlotIndex) -> Result<SlotIndex> {
        let mut current = index;
        let mut node = self.check_slot(index)?;
        while let Some(right) = node.right {
            current = right;
            node = &self.slots[right.get()];
        }
        Ok(current)
    }
}
