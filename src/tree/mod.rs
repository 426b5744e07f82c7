//! Slot-array binary search tree
//!
//! All nodes live in one storage vector reserved at construction.
//! Slot 0 is the root; every successful insertion appends exactly one
//! slot at `cursor + 1` and links it under an existing node.
//!
//! Nothing is ever removed, so slot positions stay valid for the
//! lifetime of the tree.

mod node;
mod search;
mod shape;
mod traversal;

pub use node::{Direction, Node, SlotIndex};
pub use traversal::{InOrder, PostOrder, PreOrder};

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, error, trace, warn};

use crate::{Result, TreeConfig, TreeError};

/// Outcome of a successful [`IndexedBst::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Key appended at this newly occupied slot
    Inserted(SlotIndex),

    /// Key already present at this slot; the tree is unchanged
    Duplicate(SlotIndex),
}

impl Insertion {
    /// Slot holding the key after the call
    pub fn slot(self) -> SlotIndex {
        match self {
            Insertion::Inserted(slot) | Insertion::Duplicate(slot) => slot,
        }
    }

    /// Whether a new slot was consumed
    pub fn is_inserted(self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

/// Binary search tree stored in a fixed-capacity slot array
#[derive(Debug, Clone)]
pub struct IndexedBst<K = i32> {
    /// Occupied slots, root first, in insertion order
    slots: Vec<Node<K>>,

    /// Fixed upper bound on `slots.len()`
    capacity: usize,
}

impl<K: Ord + Copy + fmt::Debug> IndexedBst<K> {
    /// Create an empty tree; the first inserted key becomes the root
    pub fn new(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            slots: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
        })
    }

    /// Create a tree with `key` at slot 0 and the default capacity
    pub fn create_root(key: K) -> Self {
        let capacity = TreeConfig::default().capacity;
        let mut slots = Vec::with_capacity(capacity);
        slots.push(Node::leaf(key));
        Self { slots, capacity }
    }

    /// Create a tree with `key` at slot 0 under an explicit configuration
    pub fn create_root_with(key: K, config: TreeConfig) -> Result<Self> {
        let mut tree = Self::new(config)?;
        tree.append(Node::leaf(key))?;
        Ok(tree)
    }

    /// Rebuild a tree from raw slots
    ///
    /// Link structure is checked: every link must point at an occupied
    /// slot, every slot but the root must have exactly one parent, and
    /// all slots must be reachable from slot 0. Key order is NOT checked;
    /// use [`IndexedBst::validate_is_bst`] for that.
    pub fn from_slots(slots: Vec<Node<K>>, config: TreeConfig) -> Result<Self> {
        config.validate()?;
        if slots.len() > config.capacity {
            return Err(TreeError::CapacityExceeded {
                capacity: config.capacity,
            });
        }

        let len = slots.len();
        let mut has_parent = vec![false; len];
        for (index, node) in slots.iter().enumerate() {
            for child in node.children() {
                let child = child.get();
                if child >= len {
                    return Err(TreeError::Corrupted(format!(
                        "slot {index} links to unoccupied slot {child}"
                    )));
                }
                if child == 0 {
                    return Err(TreeError::Corrupted(format!(
                        "slot {index} links back to the root"
                    )));
                }
                if has_parent[child] {
                    return Err(TreeError::Corrupted(format!(
                        "slot {child} has more than one parent"
                    )));
                }
                has_parent[child] = true;
            }
        }

        // One parent per slot still admits cycles detached from the root
        let mut reached = 0;
        let mut pending: Vec<usize> = if len > 0 { vec![0] } else { Vec::new() };
        while let Some(index) = pending.pop() {
            reached += 1;
            pending.extend(slots[index].children().map(SlotIndex::get));
        }
        if reached != len {
            return Err(TreeError::Corrupted(format!(
                "{} of {len} slots unreachable from the root",
                len - reached
            )));
        }

        let mut storage = Vec::with_capacity(config.capacity);
        storage.extend(slots);
        Ok(Self {
            slots: storage,
            capacity: config.capacity,
        })
    }

    /// Insert `key`, appending it at the next free slot
    ///
    /// Descends from the root until an empty child link is found in the
    /// direction the key orders towards. Equal keys are absorbed without
    /// touching storage, even when the tree is full.
    pub fn insert(&mut self, key: K) -> Result<Insertion> {
        if self.slots.is_empty() {
            let slot = self.append(Node::leaf(key))?;
            debug!(?key, "root installed");
            return Ok(Insertion::Inserted(slot));
        }

        let mut current = SlotIndex::ROOT;
        for _ in 0..self.slots.len() {
            let node = &self.slots[current.get()];
            let direction = match key.cmp(&node.key) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => {
                    debug!(?key, slot = current.get(), "duplicate key ignored");
                    return Ok(Insertion::Duplicate(current));
                }
            };

            match node.child(direction) {
                Some(next) => {
                    trace!(from = current.get(), to = next.get(), ?direction, "descend");
                    current = next;
                }
                None => {
                    let slot = self.append(Node::leaf(key))?;
                    self.slots[current.get()].set_child(direction, slot);
                    debug!(?key, slot = slot.get(), parent = current.get(), "key inserted");
                    return Ok(Insertion::Inserted(slot));
                }
            }
        }

        Err(self.corruption("insert"))
    }

    fn append(&mut self, node: Node<K>) -> Result<SlotIndex> {
        if self.slots.len() >= self.capacity {
            warn!(capacity = self.capacity, "slot storage exhausted");
            return Err(TreeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let slot = SlotIndex::new(self.slots.len());
        self.slots.push(node);
        Ok(slot)
    }

    /// Descent ran longer than the number of occupied slots
    fn corruption(&self, operation: &str) -> TreeError {
        error!(operation, slots = self.slots.len(), "descent did not terminate");
        TreeError::Corrupted(format!(
            "{operation} exceeded {} descent steps",
            self.slots.len()
        ))
    }

    pub(crate) fn check_slot(&self, index: SlotIndex) -> Result<&Node<K>> {
        self.slots.get(index.get()).ok_or(TreeError::InvalidSlot {
            index: index.get(),
            len: self.slots.len(),
        })
    }

    /// Node stored at `index`
    pub fn node(&self, index: SlotIndex) -> Result<&Node<K>> {
        self.check_slot(index)
    }

    /// Key stored at `index`
    pub fn key(&self, index: SlotIndex) -> Result<K> {
        self.check_slot(index).map(|node| node.key)
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fixed slot capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the last occupied slot
    pub fn cursor(&self) -> Option<SlotIndex> {
        self.slots.len().checked_sub(1).map(SlotIndex::new)
    }

    /// Root slot, if any node exists
    pub fn root(&self) -> Option<SlotIndex> {
        (!self.slots.is_empty()).then_some(SlotIndex::ROOT)
    }

    /// Occupied slots in storage order
    pub fn slots(&self) -> &[Node<K>] {
        &self.slots
    }

    /// Keys in storage (insertion) order
    pub fn keys_by_slot(&self) -> impl Iterator<Item = K> + '_ {
        self.slots.iter().map(|node| node.key)
    }
}

impl<K: fmt::Display> fmt::Display for IndexedBst<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", node.key)?;
        }
        Ok(())
    }
}
