//! Structural checks over the slot array
//!
//! Both walks keep their own work stack, so their stack usage does not
//! grow with tree height.

use std::fmt;

use tracing::debug;

use super::{IndexedBst, SlotIndex};
use crate::Result;

impl<K: Ord + Copy + fmt::Debug> IndexedBst<K> {
    /// Re-verify BST ordering for every slot
    ///
    /// Each slot inherits an exclusive `(lower, upper)` window from its
    /// ancestors: descending left caps the window at the parent key,
    /// descending right floors it there. Leaves are checked too.
    pub fn validate_is_bst(&self) -> bool {
        if self.slots.is_empty() {
            return true;
        }

        let mut pending: Vec<(SlotIndex, Option<K>, Option<K>)> =
            vec![(SlotIndex::ROOT, None, None)];
        while let Some((slot, lower, upper)) = pending.pop() {
            let node = &self.slots[slot.get()];
            let above_lower = lower.map_or(true, |bound| node.key > bound);
            let below_upper = upper.map_or(true, |bound| node.key < bound);
            if !(above_lower && below_upper) {
                debug!(
                    slot = slot.get(),
                    key = ?node.key,
                    ?lower,
                    ?upper,
                    "ordering violation"
                );
                return false;
            }

            if let Some(left) = node.left {
                pending.push((left, lower, Some(node.key)));
            }
            if let Some(right) = node.right {
                pending.push((right, Some(node.key), upper));
            }
        }
        true
    }

    /// Edges on the longest path from `index` down to a leaf
    ///
    /// A leaf measures 0; a missing child contributes nothing.
    pub fn max_depth(&self, index: SlotIndex) -> Result<usize> {
        self.check_slot(index)?;

        let mut deepest = 0;
        let mut pending = vec![(index, 0usize)];
        while let Some((slot, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(
                self.slots[slot.get()]
                    .children()
                    .map(|child| (child, depth + 1)),
            );
        }
        Ok(deepest)
    }

    /// Depth of the whole tree, `None` when empty
    pub fn height(&self) -> Option<usize> {
        self.root().and_then(|root| self.max_depth(root).ok())
    }
}
