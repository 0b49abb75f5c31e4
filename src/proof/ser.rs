//! Byte encoding of [`Proof`].
//!
//! ```text
//! +----------------+-------------------------------------------+
//! | magic (4B)     | "FSQP"                                    |
//! | version (u16)  | PROOF_VERSION                             |
//! | count (u32)    | number of entries                         |
//! | entry*         | label_len (u16) | label (utf-8)           |
//! |                | value_len (u32) | value bytes             |
//! +----------------+-------------------------------------------+
//! ```
//!
//! All integers are little-endian. Decoding rejects a wrong magic or
//! version, truncated input, labels that are not UTF-8 and trailing bytes.

use crate::channel::ProofEntry;
use crate::proof::types::{Proof, PROOF_MAGIC, PROOF_VERSION};
use crate::ser::{
    ensure_u16, ensure_u32, read_u16, read_u32, write_u16, write_u32, ByteReader, SerError,
    SerKind, SerResult,
};

/// Smallest possible encoded entry: two empty length prefixes.
const MIN_ENTRY_LEN: usize = 2 + 4;

impl Proof {
    /// Encodes the proof using the canonical layout.
    pub fn to_bytes(&self) -> SerResult<Vec<u8>> {
        let payload: usize = self
            .entries()
            .iter()
            .map(|entry| MIN_ENTRY_LEN + entry.label.len() + entry.value.len())
            .sum();
        let mut out = Vec::with_capacity(PROOF_MAGIC.len() + 2 + 4 + payload);
        out.extend_from_slice(&PROOF_MAGIC);
        write_u16(&mut out, PROOF_VERSION);
        write_u32(&mut out, ensure_u32(self.len(), SerKind::Proof, "count")?);
        for entry in self.entries() {
            write_entry(&mut out, entry)?;
        }
        Ok(out)
    }

    /// Decodes bytes produced by [`Proof::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> SerResult<Self> {
        let kind = SerKind::Proof;
        let mut cursor = ByteReader::new(bytes);
        let magic = cursor.read_array::<4>(kind, "magic")?;
        if magic != PROOF_MAGIC {
            return Err(SerError::invalid_value(kind, "magic"));
        }
        if read_u16(&mut cursor, kind, "version")? != PROOF_VERSION {
            return Err(SerError::invalid_value(kind, "version"));
        }
        let count = read_u32(&mut cursor, kind, "count")? as usize;
        if count > cursor.remaining() / MIN_ENTRY_LEN {
            return Err(SerError::invalid_length(kind, "count"));
        }
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(read_entry(&mut cursor)?);
        }
        cursor.finish(kind)?;
        Ok(Proof::new(entries))
    }
}

fn write_entry(out: &mut Vec<u8>, entry: &ProofEntry) -> SerResult<()> {
    let kind = SerKind::Entry;
    write_u16(out, ensure_u16(entry.label.len(), kind, "label_len")?);
    out.extend_from_slice(entry.label.as_bytes());
    write_u32(out, ensure_u32(entry.value.len(), kind, "value_len")?);
    out.extend_from_slice(&entry.value);
    Ok(())
}

fn read_entry(cursor: &mut ByteReader<'_>) -> SerResult<ProofEntry> {
    let kind = SerKind::Entry;
    let label_len = read_u16(cursor, kind, "label_len")? as usize;
    let label = cursor.read_exact(label_len, kind, "label")?;
    let label = core::str::from_utf8(label).map_err(|_| SerError::invalid_value(kind, "label"))?;
    let value_len = read_u32(cursor, kind, "value_len")? as usize;
    let value = cursor.read_exact(value_len, kind, "value")?;
    Ok(ProofEntry::new(label, value.to_vec()))
}
