//! A committed FRI layer: evaluations, their domain and Merkle tree.

use super::types::{query_positions, FriError, LayerOpening};
use crate::field::{Domain, FieldElement};
use crate::hash::Hash;
use crate::merkle::MerkleTree;

/// One layer of the FRI commit phase.
#[derive(Debug, Clone)]
pub struct FriLayer {
    index: usize,
    domain: Domain,
    tree: MerkleTree,
}

impl FriLayer {
    /// Commits to `evaluations` over `domain`.
    pub fn new(index: usize, domain: Domain, evaluations: Vec<FieldElement>) -> Result<Self, FriError> {
        if evaluations.is_empty() {
            return Err(FriError::EmptyLayer);
        }
        if evaluations.len() != domain.size() {
            return Err(FriError::Domain(crate::field::DomainError::LengthMismatch {
                expected: domain.size(),
                got: evaluations.len(),
            }));
        }
        let tree = MerkleTree::new(evaluations)?;
        Ok(Self {
            index,
            domain,
            tree,
        })
    }

    /// Position of the layer in the folding schedule.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Evaluation domain.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Number of evaluations.
    pub fn size(&self) -> usize {
        self.domain.size()
    }

    /// Committed evaluations.
    pub fn evaluations(&self) -> &[FieldElement] {
        self.tree.values()
    }

    /// Merkle root.
    pub fn root(&self) -> Hash {
        self.tree.root()
    }

    /// Opens the query position `index mod size` together with its sibling.
    pub fn open(&self, index: usize) -> Result<LayerOpening, FriError> {
        let (position, sibling_position) = query_positions(index, self.size());
        let (value, decommitment) = self.tree.open(position)?;
        let (sibling_value, sibling_decommitment) = self.tree.open(sibling_position)?;
        Ok(LayerOpening {
            position,
            value,
            decommitment,
            sibling_position,
            sibling_value,
            sibling_decommitment,
        })
    }
}
