use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};

/// Encodes a `u16` in little-endian order.
pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u32` in little-endian order.
pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Encodes a `u64` in little-endian order.
pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Converts a `usize` into a `u16` length prefix.
pub fn ensure_u16(value: usize, kind: SerKind, field: &'static str) -> SerResult<u16> {
    u16::try_from(value).map_err(|_| SerError::invalid_length(kind, field))
}

/// Converts a `usize` into a `u32` length prefix.
pub fn ensure_u32(value: usize, kind: SerKind, field: &'static str) -> SerResult<u32> {
    u32::try_from(value).map_err(|_| SerError::invalid_length(kind, field))
}

/// Reads a `u16` in little-endian order.
pub fn read_u16(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u16> {
    Ok(u16::from_le_bytes(cursor.read_array(kind, field)?))
}

/// Reads a `u32` in little-endian order.
pub fn read_u32(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u32> {
    Ok(u32::from_le_bytes(cursor.read_array(kind, field)?))
}

/// Reads a `u64` in little-endian order.
pub fn read_u64(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u64> {
    Ok(u64::from_le_bytes(cursor.read_array(kind, field)?))
}
