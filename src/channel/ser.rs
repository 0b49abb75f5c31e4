//! Fixed 40-byte encoding of [`ChannelState`]: digest then counter (LE).

use super::types::ChannelState;
use crate::ser::{read_digest, read_u64, write_digest, write_u64, ByteReader, SerKind, SerResult};

impl ChannelState {
    /// Canonical encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        write_digest(&mut out, &self.digest);
        write_u64(&mut out, self.counter);
        out
    }

    /// Decodes [`ChannelState::to_bytes`] output, rejecting trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> SerResult<Self> {
        let kind = SerKind::ChannelState;
        let mut cursor = ByteReader::new(bytes);
        let digest = read_digest(&mut cursor, kind, "digest")?;
        let counter = read_u64(&mut cursor, kind, "counter")?;
        cursor.finish(kind)?;
        Ok(Self { digest, counter })
    }
}
