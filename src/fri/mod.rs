//! Binary FRI low-degree test.
//!
//! The prover commits to the composition evaluations, then repeatedly
//! commits, draws `β` and folds, halving the domain by squaring it. After
//! `log2(N)` folds the remaining `B` values must be one constant, which is
//! sent in the clear. The verifier checks the openings of every layer at a
//! single query position and that each fold lands on the next layer.

pub mod folding;
pub mod layer;
pub mod prover;
pub mod types;
pub mod verifier;

pub use folding::{fold_layer, fold_pair};
pub use layer::FriLayer;
pub use prover::{fri_commit, fri_decommit, FriCommitment};
pub use types::{query_positions, FriError, LayerOpening};
pub use verifier::{check_folding_chain, receive_layer_opening};
