use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};
use super::ints;
use crate::field::{CanonicalSerialize, FieldElement};

/// Width of a canonical field element encoding.
pub const FELT_SIZE: usize = 8;

/// Writes a field element in canonical little-endian order.
pub fn write_felt(out: &mut Vec<u8>, value: FieldElement) {
    out.extend_from_slice(&value.to_bytes());
}

/// Reads a canonical field element, rejecting values `>= p`.
pub fn read_felt(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<FieldElement> {
    let raw = ints::read_u64(cursor, kind, field)?;
    FieldElement::from_canonical(raw).map_err(|_| SerError::invalid_value(kind, field))
}

/// Encodes a field element as a standalone entry value.
pub fn encode_felt(value: FieldElement) -> Vec<u8> {
    value.to_bytes().to_vec()
}

/// Decodes a standalone entry value holding exactly one field element.
pub fn decode_felt(bytes: &[u8]) -> SerResult<FieldElement> {
    let mut cursor = ByteReader::new(bytes);
    let value = read_felt(&mut cursor, SerKind::FieldElement, "value")?;
    cursor.finish(SerKind::FieldElement)?;
    Ok(value)
}
