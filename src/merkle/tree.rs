#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::types::{tree_height, Decommitment, MerkleError};
use crate::field::FieldElement;
use crate::hash::{hash_leaf, hash_node, Hash};
#[cfg(feature = "parallel")]
use crate::utils::{parallel::PARALLEL_THRESHOLD, parallelism_enabled, preferred_chunk_size};

/// Binary Merkle tree over field elements, owning every hashed level.
///
/// `levels[0]` holds the (padded) leaf digests and the last level holds the
/// root alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    values: Vec<FieldElement>,
    levels: Vec<Vec<Hash>>,
}

fn hash_leaves(values: &[FieldElement]) -> Vec<Hash> {
    #[cfg(feature = "parallel")]
    if parallelism_enabled() && values.len() > PARALLEL_THRESHOLD {
        return values
            .par_iter()
            .with_min_len(preferred_chunk_size(values.len()))
            .map(|value| hash_leaf(*value))
            .collect();
    }
    values.iter().map(|value| hash_leaf(*value)).collect()
}

fn hash_level(current: &[Hash]) -> Vec<Hash> {
    #[cfg(feature = "parallel")]
    if parallelism_enabled() && current.len() > PARALLEL_THRESHOLD {
        return current
            .par_chunks(2)
            .with_min_len(preferred_chunk_size(current.len() / 2))
            .map(|pair| hash_node(&pair[0], &pair[1]))
            .collect();
    }
    current
        .chunks(2)
        .map(|pair| hash_node(&pair[0], &pair[1]))
        .collect()
}

impl MerkleTree {
    /// Builds the tree, padding to a power of two by repeating the last leaf.
    pub fn new(values: Vec<FieldElement>) -> Result<Self, MerkleError> {
        let last = *values.last().ok_or(MerkleError::EmptyLeaves)?;
        let padded_len = values.len().next_power_of_two();

        let mut leaves = hash_leaves(&values);
        leaves.resize(padded_len, hash_leaf(last));

        let mut levels = Vec::with_capacity(tree_height(values.len()) + 1);
        levels.push(leaves);
        while let Some(current) = levels.last().filter(|level| level.len() > 1) {
            let next = hash_level(current);
            levels.push(next);
        }
        trace!(leaves = values.len(), height = levels.len() - 1, "merkle tree built");
        Ok(Self { values, levels })
    }

    /// Commits to `values`, returning the tree and its root.
    pub fn commit(values: &[FieldElement]) -> Result<(Self, Hash), MerkleError> {
        let tree = Self::new(values.to_vec())?;
        let root = tree.root();
        Ok((tree, root))
    }

    /// Root digest.
    pub fn root(&self) -> Hash {
        // `new` always leaves a single-element top level.
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    /// Number of committed values before padding.
    pub fn leaf_count(&self) -> usize {
        self.values.len()
    }

    /// Number of sibling digests in every authentication path.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// Committed values.
    pub fn values(&self) -> &[FieldElement] {
        &self.values
    }

    /// Returns the value at `index` with its authentication path.
    pub fn open(&self, index: usize) -> Result<(FieldElement, Decommitment), MerkleError> {
        let value = *self
            .values
            .get(index)
            .ok_or(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.values.len(),
            })?;
        let mut position = index;
        let mut path = Vec::with_capacity(self.height());
        for level in &self.levels[..self.height()] {
            path.push(level[position ^ 1]);
            position >>= 1;
        }
        Ok((value, Decommitment::new(path)))
    }
}
