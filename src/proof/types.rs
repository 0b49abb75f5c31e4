use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ProofEntry};

/// Magic prefix of the proof byte encoding.
pub const PROOF_MAGIC: [u8; 4] = *b"FSQP";
/// Current proof encoding version.
pub const PROOF_VERSION: u16 = 1;

/// Ordered log of labelled values written by the prover channel.
///
/// The verifier consumes the entries strictly in order; whether an entry was
/// mixed into the channel state is implied by its position in the protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    entries: Vec<ProofEntry>,
}

impl Proof {
    /// Wraps an entry log.
    pub fn new(entries: Vec<ProofEntry>) -> Self {
        Self { entries }
    }

    /// Entries in protocol order.
    pub fn entries(&self) -> &[ProofEntry] {
        &self.entries
    }

    /// Mutable access to the entries.
    pub fn entries_mut(&mut self) -> &mut Vec<ProofEntry> {
        &mut self.entries
    }

    /// Consumes the proof and returns its entries.
    pub fn into_entries(self) -> Vec<ProofEntry> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry carrying `label`.
    pub fn find(&self, label: &str) -> Option<&ProofEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Mutable access to the first entry carrying `label`.
    pub fn find_mut(&mut self, label: &str) -> Option<&mut ProofEntry> {
        self.entries.iter_mut().find(|entry| entry.label == label)
    }
}

impl From<Vec<ProofEntry>> for Proof {
    fn from(entries: Vec<ProofEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<Channel> for Proof {
    fn from(channel: Channel) -> Self {
        Self::new(channel.into_entries())
    }
}
