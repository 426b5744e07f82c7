//! Slot-addressed node representation
//!
//! Node = key + two optional slot handles
//! Children are positions in the owning tree's storage, never pointers,
//! so a node carries no back-references and no lifetime.

use std::fmt;

/// Position of a node in the tree's slot storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Slot 0, occupied by the root once the tree is non-empty
    pub const ROOT: SlotIndex = SlotIndex(0);

    /// Wrap a raw slot position
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw slot position
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<SlotIndex> for usize {
    fn from(slot: SlotIndex) -> usize {
        slot.0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which child link to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards strictly smaller keys
    Left,

    /// Towards strictly greater keys
    Right,
}

/// Tree node stored in one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Node<K> {
    /// Ordering key
    pub key: K,

    /// Slot of the left child (smaller keys)
    pub left: Option<SlotIndex>,

    /// Slot of the right child (greater keys)
    pub right: Option<SlotIndex>,
}

impl<K> Node<K> {
    /// Node with no children
    pub fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Check if leaf (no child in either direction)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Child link in the given direction
    #[inline]
    pub fn child(&self, direction: Direction) -> Option<SlotIndex> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Existing children, left first
    pub fn children(&self) -> impl Iterator<Item = SlotIndex> {
        self.left.into_iter().chain(self.right)
    }

    pub(crate) fn set_child(&mut self, direction: Direction, slot: SlotIndex) {
        match direction {
            Direction::Left => self.left = Some(slot),
            Direction::Right => self.right = Some(slot),
        }
    }
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let link = |slot: Option<SlotIndex>| slot.map_or_else(|| "-".to_string(), |s| s.to_string());
        write!(f, "{} [{}, {}]", self.key, link(self.left), link(self.right))
    }
}
