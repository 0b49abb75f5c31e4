use crate::channel::ChannelError;
use crate::field::{DomainError, FieldElement, FieldError};
use crate::merkle::{Decommitment, MerkleError};

/// Errors raised by the FRI commit, decommit and verification routines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FriError {
    /// Arithmetic failure (a zero `x` while folding).
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Domain construction or indexing failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Commitment or opening failure.
    #[error(transparent)]
    Merkle(#[from] MerkleError),
    /// Channel failure while sending or receiving layer data.
    #[error(transparent)]
    Channel(#[from] ChannelError),
    /// Attempted to commit an empty codeword.
    #[error("cannot commit an empty FRI layer")]
    EmptyLayer,
    /// A layer cannot be halved.
    #[error("FRI layer of odd size {size} cannot be folded")]
    OddLayer {
        /// Offending size.
        size: usize,
    },
    /// The layer after the last fold is not constant, so the input was not
    /// of the claimed degree.
    #[error("last FRI layer of size {size} is not constant")]
    NonConstantLastLayer {
        /// Size of the last layer.
        size: usize,
    },
    /// A folded pair does not match the next layer.
    #[error("FRI folding mismatch after layer {layer}")]
    FoldingMismatch {
        /// Layer whose fold disagrees with its successor.
        layer: usize,
    },
}

/// Authenticated value of one layer at a query position and its sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOpening {
    /// `idx mod s_i`.
    pub position: usize,
    /// Value at `position`.
    pub value: FieldElement,
    /// Path for `value`.
    pub decommitment: Decommitment,
    /// `(idx + s_i / 2) mod s_i`.
    pub sibling_position: usize,
    /// Value at `sibling_position`.
    pub sibling_value: FieldElement,
    /// Path for `sibling_value`.
    pub sibling_decommitment: Decommitment,
}

/// Query position and its sibling inside a layer of `layer_size` values.
pub fn query_positions(index: usize, layer_size: usize) -> (usize, usize) {
    let position = index % layer_size;
    (position, (position + layer_size / 2) % layer_size)
}
