//! Binary Merkle commitments over field elements.
//!
//! * **Leaves:** `H(0x00 || le_bytes(value))`, eight bytes per value.
//! * **Nodes:** `H(0x01 || left || right)`.
//! * **Padding:** the leaf vector is extended to the next power of two by
//!   repeating its last value (rightmost duplication).
//! * **Paths:** siblings ordered from the leaf level upward; the bits of the
//!   leaf index select left or right at each level.

mod proof;
mod tree;
mod types;

pub use proof::compute_root;
pub use tree::MerkleTree;
pub use types::{tree_height, Decommitment, MerkleError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldElement;

    fn values(n: u64) -> Vec<FieldElement> {
        (0..n).map(|i| FieldElement::from(i * 31 + 5)).collect()
    }

    #[test]
    fn open_and_verify_every_leaf() {
        let data = values(13);
        let (tree, root) = MerkleTree::commit(&data).unwrap();
        assert_eq!(tree.height(), 4);
        for (index, expected) in data.iter().enumerate() {
            let (value, path) = tree.open(index).unwrap();
            assert_eq!(value, *expected);
            MerkleTree::verify_with_leaf_count(index, value, &path, &root, data.len()).unwrap();
        }
    }

    #[test]
    fn single_leaf_root_is_leaf_digest() {
        let (tree, root) = MerkleTree::commit(&[FieldElement::ONE]).unwrap();
        assert_eq!(root, crate::hash::hash_leaf(FieldElement::ONE));
        let (_, path) = tree.open(0).unwrap();
        assert!(path.is_empty());
        MerkleTree::verify(0, FieldElement::ONE, &path, &root).unwrap();
    }

    #[test]
    fn padding_duplicates_last_leaf() {
        let data = values(3);
        let mut padded = data.clone();
        padded.push(data[2]);
        let (_, short_root) = MerkleTree::commit(&data).unwrap();
        let (_, padded_root) = MerkleTree::commit(&padded).unwrap();
        assert_eq!(short_root, padded_root);
    }

    #[test]
    fn empty_and_out_of_range() {
        assert_eq!(MerkleTree::commit(&[]).unwrap_err(), MerkleError::EmptyLeaves);
        let (tree, _) = MerkleTree::commit(&values(4)).unwrap();
        assert_eq!(
            tree.open(4).unwrap_err(),
            MerkleError::IndexOutOfRange {
                index: 4,
                leaf_count: 4
            }
        );
    }

    #[test]
    fn wrong_value_and_wrong_shape_rejected() {
        let data = values(8);
        let (tree, root) = MerkleTree::commit(&data).unwrap();
        let (value, path) = tree.open(3).unwrap();
        assert_eq!(
            MerkleTree::verify(3, value + FieldElement::ONE, &path, &root),
            Err(MerkleError::VerificationFailed { index: 3 })
        );
        assert_eq!(
            MerkleTree::verify(8, value, &path, &root),
            Err(MerkleError::IndexBeyondPath { index: 8, depth: 3 })
        );
        assert_eq!(
            MerkleTree::verify_with_leaf_count(3, value, &path, &root, 16),
            Err(MerkleError::InvalidPathLength {
                expected: 4,
                got: 3
            })
        );
    }
}
