use core::fmt;

use blake2::{Blake2s256, Digest};
use serde::{Deserialize, Serialize};

use crate::field::{CanonicalSerialize, FieldElement};

/// Width of every digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Domain-separation tag prefixed to Merkle leaves.
pub const LEAF_TAG: u8 = 0x00;
/// Domain-separation tag prefixed to Merkle inner nodes.
pub const NODE_TAG: u8 = 0x01;

/// Blake2s-256 digest value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash {
    bytes: [u8; DIGEST_SIZE],
}

impl Hash {
    /// Constructs a hash value from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.bytes
    }

    /// Consumes the hash and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.bytes
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; DIGEST_SIZE]> for Hash {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; DIGEST_SIZE] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a digest.
#[derive(Clone, Copy)]
pub struct HexOutput([u8; DIGEST_SIZE]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Streaming Blake2s-256 hasher.
#[derive(Clone, Default)]
pub struct Hasher {
    state: Blake2s256,
}

impl Hasher {
    /// Creates a new hasher instance.
    pub fn new() -> Self {
        Self {
            state: Blake2s256::new(),
        }
    }

    /// Absorbs additional bytes into the hasher state.
    pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
        Digest::update(&mut self.state, bytes);
        self
    }

    /// Finalises the hasher and returns a 32-byte digest.
    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.state.finalize().into())
    }
}

/// Computes the Blake2s-256 digest of `input`.
pub fn hash(input: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// Digest of a Merkle leaf: `H(0x00 || le_bytes(value))`.
pub fn hash_leaf(value: FieldElement) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(&[LEAF_TAG]).update(&value.to_bytes());
    hasher.finalize()
}

/// Digest of a Merkle inner node: `H(0x01 || left || right)`.
pub fn hash_node(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Hasher::new();
    hasher
        .update(&[NODE_TAG])
        .update(left.as_bytes())
        .update(right.as_bytes());
    hasher.finalize()
}
