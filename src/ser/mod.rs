//! Canonical little-endian byte codecs.
//!
//! Every entry value in a proof is one of three shapes: a field element
//! (eight bytes), a digest (32 bytes) or an authentication path
//! (`u32` count followed by digests). The helpers here encode and decode
//! those shapes and the integer framing around them.

mod cursor;
mod digest;
mod error;
mod felt;
mod ints;

pub use cursor::ByteReader;
pub use digest::{
    decode_digest, decode_path, encode_digest, encode_path, read_digest, write_digest,
    MAX_PATH_LEN,
};
pub use error::{SerError, SerKind, SerResult};
pub use felt::{decode_felt, encode_felt, read_felt, write_felt, FELT_SIZE};
pub use ints::{ensure_u16, ensure_u32, read_u16, read_u32, read_u64, write_u16, write_u32, write_u64};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldElement;
    use crate::hash::hash;

    #[test]
    fn felt_rejects_noncanonical_and_trailing() {
        let p = FieldElement::MODULUS.value.to_le_bytes();
        assert_eq!(
            decode_felt(&p),
            Err(SerError::invalid_value(SerKind::FieldElement, "value"))
        );
        let mut long = encode_felt(FieldElement::ONE);
        long.push(0);
        assert!(matches!(
            decode_felt(&long),
            Err(SerError::TrailingBytes { consumed: 8, remaining: 1, .. })
        ));
        assert!(matches!(
            decode_felt(&[1, 2, 3]),
            Err(SerError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn path_codec() {
        let path = vec![hash(b"a"), hash(b"b")];
        let bytes = encode_path(&path).unwrap();
        assert_eq!(bytes.len(), 4 + 64);
        assert_eq!(decode_path(&bytes).unwrap(), path);

        let mut oversized = Vec::new();
        write_u32(&mut oversized, (MAX_PATH_LEN + 1) as u32);
        assert_eq!(
            decode_path(&oversized),
            Err(SerError::invalid_length(SerKind::Decommitment, "count"))
        );
    }

    #[test]
    fn error_display() {
        let err = SerError::unexpected_end(SerKind::Proof, "magic");
        assert_eq!(err.to_string(), "proof: unexpected end of input while reading magic");
    }
}
