use super::tree::MerkleTree;
use super::types::{tree_height, Decommitment, MerkleError};
use crate::field::FieldElement;
use crate::hash::{hash_leaf, hash_node, Hash};

/// Recomputes the root implied by `value` at `index` and the siblings.
pub fn compute_root(
    index: usize,
    value: FieldElement,
    decommitment: &Decommitment,
) -> Result<Hash, MerkleError> {
    let depth = decommitment.len();
    let fits = depth >= usize::BITS as usize || index >> depth == 0;
    if !fits {
        return Err(MerkleError::IndexBeyondPath { index, depth });
    }
    let mut position = index;
    let mut current = hash_leaf(value);
    for sibling in decommitment.siblings() {
        current = if position & 1 == 0 {
            hash_node(&current, sibling)
        } else {
            hash_node(sibling, &current)
        };
        position >>= 1;
    }
    Ok(current)
}

impl MerkleTree {
    /// Checks that `value` sits at `index` under `root`.
    pub fn verify(
        index: usize,
        value: FieldElement,
        decommitment: &Decommitment,
        root: &Hash,
    ) -> Result<(), MerkleError> {
        if compute_root(index, value, decommitment)? == *root {
            Ok(())
        } else {
            Err(MerkleError::VerificationFailed { index })
        }
    }

    /// Like [`MerkleTree::verify`], but also pins the tree shape to
    /// `leaf_count` committed values.
    pub fn verify_with_leaf_count(
        index: usize,
        value: FieldElement,
        decommitment: &Decommitment,
        root: &Hash,
        leaf_count: usize,
    ) -> Result<(), MerkleError> {
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }
        let expected = tree_height(leaf_count);
        if decommitment.len() != expected {
            return Err(MerkleError::InvalidPathLength {
                expected,
                got: decommitment.len(),
            });
        }
        Self::verify(index, value, decommitment, root)
    }
}
