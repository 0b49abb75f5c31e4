//! Error classes emitted by the prover and the verification pipeline.
//!
//! Verifier failures are reported as a [`VerifyError`], which pairs the
//! [`VerifierStep`] that was executing with a [`RejectReason`]. The reason
//! falls into one of four classes:
//!
//! | class          | source                              |
//! |----------------|-------------------------------------|
//! | `Domain`       | field arithmetic or domain indexing |
//! | `Protocol`     | channel replay ([`ChannelError`])   |
//! | `Verification` | Merkle authentication               |
//! | `ProofInvalid` | algebraic checks ([`InvalidCheck`]) |

use core::fmt;

use crate::air::TraceError;
use crate::channel::ChannelError;
use crate::config::ConfigError;
use crate::field::{DomainError, FieldElement, FieldError};
use crate::fri::FriError;
use crate::merkle::MerkleError;
use crate::ser::SerError;

/// Algebraic checks that can reject an otherwise well-formed proof.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCheck {
    /// `cp(x)` recomputed from the trace openings disagrees with the first
    /// FRI layer.
    #[error("composition identity does not hold at the query point")]
    CompositionIdentity,
    /// Folding layer `layer` does not produce the next layer's value.
    #[error("FRI layer {layer} does not fold into its successor")]
    FriLayer {
        /// Index of the failing layer.
        layer: usize,
    },
    /// The last-layer value repeated in the decommitment differs from the
    /// committed one.
    #[error("last FRI layer mismatch: committed {committed}, decommitted {decommitted}")]
    LastLayerMismatch {
        /// Value mixed into the channel during the commit phase.
        committed: FieldElement,
        /// Value found at the end of the log.
        decommitted: FieldElement,
    },
}

/// Why the verifier rejected a proof.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// Field or domain failure while recomputing values.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    /// The proof log does not follow the protocol.
    #[error("protocol error: {0}")]
    Protocol(#[from] ChannelError),
    /// A Merkle opening did not authenticate.
    #[error("verification error: {0}")]
    Verification(#[from] MerkleError),
    /// An algebraic check failed.
    #[error("invalid proof: {0}")]
    ProofInvalid(#[from] InvalidCheck),
    /// The verifier was given an unusable configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The proof bytes could not be decoded.
    #[error("malformed proof bytes: {0}")]
    Encoding(#[from] SerError),
}

impl From<FieldError> for RejectReason {
    fn from(err: FieldError) -> Self {
        RejectReason::Domain(DomainError::Field(err))
    }
}

impl From<FriError> for RejectReason {
    fn from(err: FriError) -> Self {
        match err {
            FriError::Field(err) => err.into(),
            FriError::Domain(err) => RejectReason::Domain(err),
            FriError::Merkle(err) => RejectReason::Verification(err),
            FriError::Channel(err) => RejectReason::Protocol(err),
            FriError::FoldingMismatch { layer } => InvalidCheck::FriLayer { layer }.into(),
            FriError::EmptyLayer => RejectReason::Domain(DomainError::UnsupportedSize { size: 0 }),
            FriError::OddLayer { size } | FriError::NonConstantLastLayer { size } => {
                RejectReason::Domain(DomainError::UnsupportedSize { size })
            }
        }
    }
}

/// Verifier state machine positions, in protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierStep {
    /// Decoding the proof bytes.
    DecodeProof,
    /// Validating the configuration and building domains.
    Configure,
    /// Reading `trace_root`.
    ReceiveTraceRoot,
    /// Drawing `cp_alpha_0..2`.
    DeriveAlphas,
    /// Reading `cp_{i}_root`.
    ReceiveFriRoot(usize),
    /// Drawing `cp_{i+1}_beta`.
    DeriveBeta(usize),
    /// Reading the committed `last_fri_layer`.
    ReceiveLastLayer,
    /// Drawing the query index.
    DeriveQueryIndex,
    /// Authenticating `f(x)`, `f(gx)` and `f(ggx)`.
    VerifyTraceOpenings,
    /// Authenticating the openings of FRI layer `i`.
    VerifyFriOpenings(usize),
    /// Reading the repeated last layer and checking the log is empty.
    ConsumeProof,
    /// Recomputing `cp(x)` from the trace openings.
    CheckCompositionIdentity,
    /// Folding layer `i` into layer `i + 1`.
    CheckFriFoldingChain(usize),
}

impl fmt::Display for VerifierStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifierStep::DecodeProof => write!(f, "decode proof"),
            VerifierStep::Configure => write!(f, "configure"),
            VerifierStep::ReceiveTraceRoot => write!(f, "receive trace root"),
            VerifierStep::DeriveAlphas => write!(f, "derive alphas"),
            VerifierStep::ReceiveFriRoot(layer) => write!(f, "receive FRI root {layer}"),
            VerifierStep::DeriveBeta(layer) => write!(f, "derive beta {layer}"),
            VerifierStep::ReceiveLastLayer => write!(f, "receive last layer"),
            VerifierStep::DeriveQueryIndex => write!(f, "derive query index"),
            VerifierStep::VerifyTraceOpenings => write!(f, "verify trace openings"),
            VerifierStep::VerifyFriOpenings(layer) => write!(f, "verify FRI openings {layer}"),
            VerifierStep::ConsumeProof => write!(f, "consume proof"),
            VerifierStep::CheckCompositionIdentity => write!(f, "check composition identity"),
            VerifierStep::CheckFriFoldingChain(layer) => write!(f, "check FRI folding {layer}"),
        }
    }
}

/// Rejection reported by [`verify`](super::verify).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("proof rejected at {step}: {reason}")]
pub struct VerifyError {
    /// Step that was executing.
    pub step: VerifierStep,
    /// What went wrong.
    #[source]
    pub reason: RejectReason,
}

impl VerifyError {
    /// Pairs `reason` with `step`.
    pub fn new(step: VerifierStep, reason: impl Into<RejectReason>) -> Self {
        Self {
            step,
            reason: reason.into(),
        }
    }
}

/// Attaches a [`VerifierStep`] to fallible verifier operations.
pub(crate) trait AtStep<T> {
    fn at(self, step: VerifierStep) -> Result<T, VerifyError>;
}

impl<T, E: Into<RejectReason>> AtStep<T> for Result<T, E> {
    fn at(self, step: VerifierStep) -> Result<T, VerifyError> {
        self.map_err(|err| VerifyError::new(step, err))
    }
}

/// Failures raised while producing a proof.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProverError {
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The supplied trace does not satisfy the FibonacciSq constraints.
    #[error("invalid trace: {0}")]
    InvalidTrace(#[from] TraceError),
    /// Domain construction or interpolation failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Arithmetic failure.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Commitment failure.
    #[error(transparent)]
    Merkle(#[from] MerkleError),
    /// Channel misuse.
    #[error(transparent)]
    Channel(#[from] ChannelError),
    /// FRI commit or decommit failure.
    #[error(transparent)]
    Fri(#[from] FriError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fri_errors_map_to_reject_classes() {
        let reason = RejectReason::from(FriError::FoldingMismatch { layer: 3 });
        assert_eq!(
            reason,
            RejectReason::ProofInvalid(InvalidCheck::FriLayer { layer: 3 })
        );
        let reason = RejectReason::from(FriError::Merkle(MerkleError::VerificationFailed {
            index: 1,
        }));
        assert!(matches!(reason, RejectReason::Verification(_)));
        let reason = RejectReason::from(FriError::Channel(ChannelError::TrailingEntries {
            remaining: 1,
        }));
        assert!(matches!(reason, RejectReason::Protocol(_)));
        let reason = RejectReason::from(FieldError::DivisionByZero);
        assert!(matches!(reason, RejectReason::Domain(DomainError::Field(_))));
    }

    #[test]
    fn verify_error_display_names_the_step() {
        let err = VerifyError::new(
            VerifierStep::CheckFriFoldingChain(2),
            InvalidCheck::FriLayer { layer: 2 },
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"proof rejected at check FRI folding 2: invalid proof: FRI layer 2 does not fold into its successor"
        );
    }
}
