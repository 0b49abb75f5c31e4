use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::{hash, Hash};
use crate::ser::SerError;

/// Seed hashed into the initial channel digest.
pub const CHANNEL_SEED: &[u8] = b"fibsq-stark/channel/v1";

/// Which side of the protocol a channel plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelRole {
    /// Writes the proof log.
    Prover,
    /// Replays a proof log.
    Verifier,
}

impl fmt::Display for ChannelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelRole::Prover => write!(f, "prover"),
            ChannelRole::Verifier => write!(f, "verifier"),
        }
    }
}

/// Fiat–Shamir state: running digest plus a monotone operation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelState {
    /// Running digest.
    pub digest: Hash,
    /// Number of send/receive/draw operations applied so far.
    pub counter: u64,
}

impl ChannelState {
    /// Width of [`ChannelState::to_bytes`].
    pub const ENCODED_LEN: usize = 40;

    /// State of a freshly created channel.
    pub fn initial() -> Self {
        Self {
            digest: hash(CHANNEL_SEED),
            counter: 0,
        }
    }
}

impl Default for ChannelState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A labelled message in the proof log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofEntry {
    /// Protocol label, e.g. `"trace_root"`.
    pub label: String,
    /// Canonical encoding of the value.
    pub value: Vec<u8>,
}

impl ProofEntry {
    /// Creates an entry.
    pub fn new(label: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Protocol-level failures raised by [`Channel`](super::Channel).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// Operation not allowed for this role.
    #[error("{operation} is not available to the {role} channel")]
    WrongRole {
        /// Attempted operation.
        operation: &'static str,
        /// Role of the channel.
        role: ChannelRole,
    },
    /// Verifier asked for an entry but the log is empty.
    #[error("proof exhausted while expecting `{expected}`")]
    Exhausted {
        /// Label the verifier expected next.
        expected: String,
    },
    /// Next entry carries a different label.
    #[error("expected proof entry `{expected}`, found `{found}`")]
    LabelMismatch {
        /// Label the verifier expected.
        expected: String,
        /// Label present in the log.
        found: String,
    },
    /// Entries remain after the verifier finished.
    #[error("{remaining} unconsumed proof entries")]
    TrailingEntries {
        /// Number of unread entries.
        remaining: usize,
    },
    /// Entry value could not be decoded.
    #[error("malformed value for `{label}`")]
    Malformed {
        /// Label of the offending entry.
        label: String,
        /// Decoding failure.
        #[source]
        source: SerError,
    },
    /// `low > high` when drawing a random integer.
    #[error("empty range [{low}, {high}]")]
    EmptyRange {
        /// Lower bound.
        low: u64,
        /// Upper bound.
        high: u64,
    },
}
