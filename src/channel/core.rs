use tracing::trace;

use super::types::{ChannelError, ChannelRole, ChannelState, ProofEntry};
use crate::field::FieldElement;
use crate::hash::{Hash, Hasher};
use crate::merkle::Decommitment;
use crate::ser::{
    decode_digest, decode_felt, decode_path, encode_digest, encode_felt, encode_path, SerError,
};

const MIX_TAG: &[u8] = b"mix";
const DRAW_TAG: &[u8] = b"draw";

/// Non-interactive Fiat–Shamir channel.
///
/// The prover side appends labelled entries to a log; the verifier side
/// replays the same log in order. Both sides apply identical state updates,
/// so matching call sequences yield identical challenges and final states.
#[derive(Debug, Clone)]
pub struct Channel {
    role: ChannelRole,
    state: ChannelState,
    entries: Vec<ProofEntry>,
    position: usize,
}

impl Channel {
    /// Creates an empty prover channel.
    pub fn prover() -> Self {
        Self {
            role: ChannelRole::Prover,
            state: ChannelState::initial(),
            entries: Vec::new(),
            position: 0,
        }
    }

    /// Creates a verifier channel replaying `entries`.
    pub fn verifier(entries: Vec<ProofEntry>) -> Self {
        Self {
            role: ChannelRole::Verifier,
            state: ChannelState::initial(),
            entries,
            position: 0,
        }
    }

    /// Role of this channel.
    pub fn role(&self) -> ChannelRole {
        self.role
    }

    /// Current Fiat–Shamir state.
    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Entries written (prover) or still held (verifier).
    pub fn entries(&self) -> &[ProofEntry] {
        &self.entries
    }

    /// Consumes the channel and returns its log.
    pub fn into_entries(self) -> Vec<ProofEntry> {
        self.entries
    }

    /// `true` once every entry has been received.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.entries.len()
    }

    /// Number of entries not yet received.
    pub fn remaining(&self) -> usize {
        self.entries.len().saturating_sub(self.position)
    }

    /// Ends a verifier replay, requiring the log to be fully consumed.
    pub fn finish(&self) -> Result<ChannelState, ChannelError> {
        match self.remaining() {
            0 => Ok(self.state),
            remaining => Err(ChannelError::TrailingEntries { remaining }),
        }
    }

    fn require(&self, role: ChannelRole, operation: &'static str) -> Result<(), ChannelError> {
        if self.role == role {
            Ok(())
        } else {
            Err(ChannelError::WrongRole {
                operation,
                role: self.role,
            })
        }
    }

    fn absorb(&mut self, value: &[u8], mix: bool) {
        if mix {
            let mut hasher = Hasher::new();
            hasher
                .update(MIX_TAG)
                .update(self.state.digest.as_bytes())
                .update(&self.state.counter.to_le_bytes())
                .update(&(value.len() as u64).to_le_bytes())
                .update(value);
            self.state.digest = hasher.finalize();
        }
        self.state.counter += 1;
    }

    fn draw(&mut self) -> Hash {
        let mut hasher = Hasher::new();
        hasher
            .update(DRAW_TAG)
            .update(self.state.digest.as_bytes())
            .update(&self.state.counter.to_le_bytes());
        self.state.digest = hasher.finalize();
        self.state.counter += 1;
        self.state.digest
    }

    /// Appends an entry; when `mix` is set the value is bound into the state.
    pub fn send(&mut self, label: &str, value: Vec<u8>, mix: bool) -> Result<(), ChannelError> {
        self.require(ChannelRole::Prover, "send")?;
        self.absorb(&value, mix);
        trace!(label, mix, counter = self.state.counter, "channel send");
        self.entries.push(ProofEntry::new(label, value));
        Ok(())
    }

    /// Pops the next entry, which must carry `label`, and applies the same
    /// state update as [`Channel::send`].
    pub fn receive(&mut self, label: &str, mix: bool) -> Result<Vec<u8>, ChannelError> {
        self.require(ChannelRole::Verifier, "receive")?;
        let entry = self
            .entries
            .get(self.position)
            .ok_or_else(|| ChannelError::Exhausted {
                expected: label.to_owned(),
            })?;
        if entry.label != label {
            return Err(ChannelError::LabelMismatch {
                expected: label.to_owned(),
                found: entry.label.clone(),
            });
        }
        let value = entry.value.clone();
        self.position += 1;
        self.absorb(&value, mix);
        trace!(label, mix, counter = self.state.counter, "channel receive");
        Ok(value)
    }

    fn malformed(label: &str) -> impl FnOnce(SerError) -> ChannelError + '_ {
        move |source| ChannelError::Malformed {
            label: label.to_owned(),
            source,
        }
    }

    /// Sends a field element in canonical encoding.
    pub fn send_field_element(
        &mut self,
        label: &str,
        value: FieldElement,
        mix: bool,
    ) -> Result<(), ChannelError> {
        self.send(label, encode_felt(value), mix)
    }

    /// Receives a canonical field element.
    pub fn receive_field_element(
        &mut self,
        label: &str,
        mix: bool,
    ) -> Result<FieldElement, ChannelError> {
        let bytes = self.receive(label, mix)?;
        decode_felt(&bytes).map_err(Self::malformed(label))
    }

    /// Sends a 32-byte digest.
    pub fn send_digest(&mut self, label: &str, digest: &Hash, mix: bool) -> Result<(), ChannelError> {
        self.send(label, encode_digest(digest), mix)
    }

    /// Receives a 32-byte digest.
    pub fn receive_digest(&mut self, label: &str, mix: bool) -> Result<Hash, ChannelError> {
        let bytes = self.receive(label, mix)?;
        decode_digest(&bytes).map_err(Self::malformed(label))
    }

    /// Sends a Merkle authentication path.
    pub fn send_decommitment(
        &mut self,
        label: &str,
        decommitment: &Decommitment,
        mix: bool,
    ) -> Result<(), ChannelError> {
        let bytes = encode_path(decommitment.siblings()).map_err(Self::malformed(label))?;
        self.send(label, bytes, mix)
    }

    /// Receives a Merkle authentication path.
    pub fn receive_decommitment(
        &mut self,
        label: &str,
        mix: bool,
    ) -> Result<Decommitment, ChannelError> {
        let bytes = self.receive(label, mix)?;
        decode_path(&bytes)
            .map(Decommitment::new)
            .map_err(Self::malformed(label))
    }

    /// Draws a field element from the state; nothing is written to the log.
    pub fn send_random_field_element(&mut self, label: &str) -> FieldElement {
        let digest = self.draw();
        let value = FieldElement::from_digest_bytes(digest.as_bytes());
        trace!(label, %value, counter = self.state.counter, "channel draw");
        value
    }

    /// Verifier twin of [`Channel::send_random_field_element`].
    pub fn receive_random_field_element(&mut self, label: &str) -> FieldElement {
        self.send_random_field_element(label)
    }

    fn draw_u64(&mut self) -> u64 {
        let digest = self.draw();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(word)
    }

    /// Draws an integer uniformly from `[low, high]` by rejection sampling.
    pub fn send_random_int(&mut self, low: u64, high: u64, label: &str) -> Result<u64, ChannelError> {
        if low > high {
            return Err(ChannelError::EmptyRange { low, high });
        }
        let value = match (high - low).checked_add(1) {
            None => self.draw_u64(),
            Some(range) => {
                let limit = (u64::MAX / range) * range;
                loop {
                    let candidate = self.draw_u64();
                    if candidate < limit {
                        break low + candidate % range;
                    }
                }
            }
        };
        trace!(label, value, counter = self.state.counter, "channel draw int");
        Ok(value)
    }

    /// Verifier twin of [`Channel::send_random_int`].
    pub fn receive_random_int(
        &mut self,
        low: u64,
        high: u64,
        label: &str,
    ) -> Result<u64, ChannelError> {
        self.send_random_int(low, high, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_matches_prover() {
        let mut prover = Channel::prover();
        prover.send("root", vec![1, 2, 3], true).unwrap();
        let alpha = prover.send_random_field_element("alpha");
        prover
            .send_field_element("value", FieldElement::from(9u64), false)
            .unwrap();
        let index = prover.send_random_int(0, 99, "query").unwrap();
        let prover_state = prover.state();

        let mut verifier = Channel::verifier(prover.into_entries());
        assert_eq!(verifier.receive("root", true).unwrap(), vec![1, 2, 3]);
        assert_eq!(verifier.receive_random_field_element("alpha"), alpha);
        assert_eq!(
            verifier.receive_field_element("value", false).unwrap(),
            FieldElement::from(9u64)
        );
        assert_eq!(verifier.receive_random_int(0, 99, "query").unwrap(), index);
        assert!(index < 100);
        assert_eq!(verifier.finish().unwrap(), prover_state);
    }

    #[test]
    fn unmixed_send_only_advances_counter() {
        let mut channel = Channel::prover();
        let before = channel.state();
        channel.send("x", vec![7], false).unwrap();
        assert_eq!(channel.state().digest, before.digest);
        assert_eq!(channel.state().counter, 1);
    }

    #[test]
    fn roles_are_enforced() {
        let mut prover = Channel::prover();
        assert!(matches!(
            prover.receive("x", true),
            Err(ChannelError::WrongRole { operation: "receive", .. })
        ));
        let mut verifier = Channel::verifier(Vec::new());
        assert!(matches!(
            verifier.send("x", Vec::new(), true),
            Err(ChannelError::WrongRole { operation: "send", .. })
        ));
        assert_eq!(
            verifier.receive("x", true),
            Err(ChannelError::Exhausted {
                expected: "x".into()
            })
        );
    }

    #[test]
    fn degenerate_ranges() {
        let mut channel = Channel::prover();
        assert_eq!(channel.send_random_int(5, 5, "q").unwrap(), 5);
        assert_eq!(
            channel.send_random_int(6, 5, "q"),
            Err(ChannelError::EmptyRange { low: 6, high: 5 })
        );
        channel.send_random_int(0, u64::MAX, "q").unwrap();
    }

    #[test]
    fn state_bytes_roundtrip() {
        let mut channel = Channel::prover();
        channel.send("x", vec![1], true).unwrap();
        let state = channel.state();
        let bytes = state.to_bytes();
        assert_eq!(bytes.len(), ChannelState::ENCODED_LEN);
        assert_eq!(ChannelState::from_bytes(&bytes).unwrap(), state);
        assert!(ChannelState::from_bytes(&bytes[..39]).is_err());
    }
}
