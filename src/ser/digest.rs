use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};
use super::ints;
use crate::hash::{Hash, DIGEST_SIZE};

/// Upper bound on decoded authentication path lengths.
pub const MAX_PATH_LEN: usize = 64;

/// Writes a raw digest to the output buffer.
pub fn write_digest(out: &mut Vec<u8>, digest: &Hash) {
    out.extend_from_slice(digest.as_bytes());
}

/// Reads a digest from the byte cursor.
pub fn read_digest(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<Hash> {
    cursor.read_array::<DIGEST_SIZE>(kind, field).map(Hash::from)
}

/// Encodes a digest as a standalone entry value.
pub fn encode_digest(digest: &Hash) -> Vec<u8> {
    digest.as_bytes().to_vec()
}

/// Decodes a standalone entry value holding exactly one digest.
pub fn decode_digest(bytes: &[u8]) -> SerResult<Hash> {
    let mut cursor = ByteReader::new(bytes);
    let digest = read_digest(&mut cursor, SerKind::Digest, "digest")?;
    cursor.finish(SerKind::Digest)?;
    Ok(digest)
}

/// Encodes an authentication path as `u32 count | count × digest`.
pub fn encode_path(path: &[Hash]) -> SerResult<Vec<u8>> {
    let count = ints::ensure_u32(path.len(), SerKind::Decommitment, "count")?;
    let mut out = Vec::with_capacity(4 + path.len() * DIGEST_SIZE);
    ints::write_u32(&mut out, count);
    for digest in path {
        write_digest(&mut out, digest);
    }
    Ok(out)
}

/// Decodes an authentication path, capping its length at [`MAX_PATH_LEN`].
pub fn decode_path(bytes: &[u8]) -> SerResult<Vec<Hash>> {
    let kind = SerKind::Decommitment;
    let mut cursor = ByteReader::new(bytes);
    let count = ints::read_u32(&mut cursor, kind, "count")? as usize;
    if count > MAX_PATH_LEN || count * DIGEST_SIZE > cursor.remaining() {
        return Err(SerError::invalid_length(kind, "count"));
    }
    let mut path = Vec::with_capacity(count);
    for _ in 0..count {
        path.push(read_digest(&mut cursor, kind, "sibling")?);
    }
    cursor.finish(kind)?;
    Ok(path)
}
