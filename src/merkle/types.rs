use serde::{Deserialize, Serialize};

use crate::hash::Hash;

/// Errors raised while committing to, opening or verifying a Merkle tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MerkleError {
    /// Commitment to an empty vector.
    #[error("cannot commit to an empty set of leaves")]
    EmptyLeaves,
    /// Opening index not below the leaf count.
    #[error("leaf index {index} out of range for {leaf_count} leaves")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of committed (unpadded) leaves.
        leaf_count: usize,
    },
    /// Authentication path length disagrees with the tree height.
    #[error("authentication path has {got} siblings, expected {expected}")]
    InvalidPathLength {
        /// Height derived from the leaf count.
        expected: usize,
        /// Siblings supplied.
        got: usize,
    },
    /// Index needs more bits than the path provides.
    #[error("leaf index {index} does not fit a path of depth {depth}")]
    IndexBeyondPath {
        /// Claimed leaf index.
        index: usize,
        /// Path length.
        depth: usize,
    },
    /// Recomputed root differs from the committed root.
    #[error("merkle verification failed for leaf {index}")]
    VerificationFailed {
        /// Leaf index that failed.
        index: usize,
    },
}

/// Sibling digests from leaf level to just below the root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decommitment {
    path: Vec<Hash>,
}

impl Decommitment {
    /// Wraps an ordered list of siblings.
    pub fn new(path: Vec<Hash>) -> Self {
        Self { path }
    }

    /// Sibling digests, leaf level first.
    pub fn siblings(&self) -> &[Hash] {
        &self.path
    }

    /// Mutable access, used to build tampered fixtures.
    pub fn siblings_mut(&mut self) -> &mut Vec<Hash> {
        &mut self.path
    }

    /// Number of siblings (the tree height).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` for a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consumes the decommitment and returns the siblings.
    pub fn into_path(self) -> Vec<Hash> {
        self.path
    }
}

impl From<Vec<Hash>> for Decommitment {
    fn from(path: Vec<Hash>) -> Self {
        Self::new(path)
    }
}

/// Height of a tree committing to `leaf_count` values after padding.
pub fn tree_height(leaf_count: usize) -> usize {
    leaf_count.next_power_of_two().trailing_zeros() as usize
}
