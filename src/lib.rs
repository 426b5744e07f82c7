//! # Indexed Binary Search Tree
//!
//! A binary search tree whose nodes live in one flat, pre-allocated slot
//! array instead of separate heap allocations.
//!
//! ## Representation
//!
//! 1. **Slot storage**: a single `Vec` reserved once at the configured capacity
//! 2. **Index links**: children are [`SlotIndex`] handles into that storage
//! 3. **Append-only growth**: the root is slot 0, every new key lands at `cursor + 1`
//! 4. **No deletion**: slots are never vacated or reused
//!
//! ## Usage Example
//!
//! ```
//! use indexed_bst::IndexedBst;
//!
//! let mut tree = IndexedBst::create_root(50);
//! for key in [10, 60, 25, 30, 92, 15, 67] {
//!     tree.insert(key)?;
//! }
//!
//! assert!(tree.validate_is_bst());
//! assert_eq!(tree.tree_sort(), vec![10, 15, 25, 30, 50, 60, 67, 92]);
//! # Ok::<(), indexed_bst::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree; // Slot-array tree, search, shape checks and traversals

pub use tree::{
    Direction, InOrder, IndexedBst, Insertion, Node, PostOrder, PreOrder, SlotIndex,
};

use thiserror::Error;

/// Slot capacity used when no explicit configuration is given
pub const DEFAULT_CAPACITY: usize = 100;

/// Configuration parameters for a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Upper bound on occupied slots, fixed for the lifetime of the tree
    pub capacity: usize,
}

impl TreeConfig {
    /// Configuration with an explicit slot capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject configurations that could never hold a root
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(TreeError::InvalidConfiguration(
                "capacity must be at least one slot".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Errors raised by tree operations
///
/// Duplicate keys and failed searches are not errors: insertion reports
/// [`Insertion::Duplicate`] and searches return `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Appending a node would run past the fixed slot capacity
    #[error("slot capacity exceeded: tree holds at most {capacity} nodes")]
    CapacityExceeded {
        /// Configured capacity of the tree
        capacity: usize,
    },

    /// Caller supplied a subtree root that is not an occupied slot
    #[error("slot {index} is not occupied (tree has {len} slots)")]
    InvalidSlot {
        /// Requested slot position
        index: usize,
        /// Number of occupied slots
        len: usize,
    },

    /// Slot links do not form a single tree rooted at slot 0
    #[error("corrupted slot links: {0}")]
    Corrupted(String),

    /// Configuration rejected before any storage was reserved
    #[error("invalid tree configuration: {0}")]
    InvalidConfiguration(String),

    /// Output buffer cannot hold every key of the tree
    #[error("output buffer too small: required {required}, provided {provided}")]
    BufferTooSmall {
        /// Number of keys in the tree
        required: usize,
        /// Length of the supplied buffer
        provided: usize,
    },
}

/// Result alias for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;
