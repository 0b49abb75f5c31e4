//! Blake2s-256 hashing used by Merkle commitments and the Fiat–Shamir channel.
//!
//! Leaves and inner nodes are domain separated by a one-byte prefix
//! ([`LEAF_TAG`], [`NODE_TAG`]) so a leaf digest can never be replayed as a
//! node digest.

pub mod deterministic;

pub use deterministic::{
    hash, hash_leaf, hash_node, Hash, Hasher, HexOutput, DIGEST_SIZE, LEAF_TAG, NODE_TAG,
};
