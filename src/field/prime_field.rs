//! Prime field `F_p` with `p = 3 · 2^30 + 1`.
//!
//! # Representation
//!
//! * `FieldElement` is a transparent wrapper around a `u64` that is always
//!   kept in canonical form, i.e. inside `[0, MODULUS.value)`.
//! * Since `p < 2^32`, the product of two canonical elements fits in a `u64`
//!   and every operation reduces with a single remainder.
//! * Serialization uses **little-endian** byte order over eight bytes.
//!   Decoding rejects non-canonical encodings.

use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Metadata describing the underlying field modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    /// Prime modulus value in canonical representation.
    pub value: u64,
    /// Largest `k` such that `2^k` divides `value - 1`.
    pub two_adicity: u32,
}

impl Modulus {
    /// Creates a new modulus descriptor.
    pub const fn new(value: u64, two_adicity: u32) -> Self {
        Self { value, two_adicity }
    }
}

/// The FibonacciSq field modulus `3 · 2^30 + 1`.
pub const DEFAULT_MODULUS: Modulus = Modulus::new(3 * (1 << 30) + 1, 30);

/// Errors raised by field arithmetic and field element decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Inversion or division by the additive identity.
    #[error("division by zero in the prime field")]
    DivisionByZero,
    /// Decoded integer was not below the modulus.
    #[error("field element deserialization failed: {value} is not canonical")]
    NonCanonical {
        /// Integer found in the encoding.
        value: u64,
    },
}

/// Field element represented as a canonical value modulo the prime.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldElement(u64);

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldElement").field(&self.0).finish()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldElement {
    /// Canonical prime modulus associated with this field.
    pub const MODULUS: Modulus = DEFAULT_MODULUS;
    /// Order of the multiplicative group, `3 · 2^30`.
    pub const GROUP_ORDER: u64 = DEFAULT_MODULUS.value - 1;
    /// Designated generator of the full multiplicative group.
    pub const GENERATOR: FieldElement = FieldElement(5);
    /// Additive identity.
    pub const ZERO: FieldElement = FieldElement(0);
    /// Multiplicative identity.
    pub const ONE: FieldElement = FieldElement(1);

    /// Creates an element from an arbitrary integer, reducing it modulo `p`.
    pub const fn new(value: u64) -> Self {
        FieldElement(value % Self::MODULUS.value)
    }

    /// Creates an element from an integer that must already be canonical.
    pub fn from_canonical(value: u64) -> Result<Self, FieldError> {
        if value < Self::MODULUS.value {
            Ok(FieldElement(value))
        } else {
            Err(FieldError::NonCanonical { value })
        }
    }

    /// Returns the fixed primitive element of order `3 · 2^30`.
    pub const fn generator() -> Self {
        Self::GENERATOR
    }

    /// Returns the canonical integer representative.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `true` for the additive identity.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Squares the element.
    pub fn square(self) -> Self {
        self * self
    }

    /// Raises the element to `exponent` using square-and-multiply.
    pub fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc *= base;
            }
            base = base.square();
            exponent >>= 1;
        }
        acc
    }

    /// Multiplicative inverse via Fermat's little theorem.
    pub fn inv(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(Self::MODULUS.value - 2))
    }

    /// Divides `self` by `rhs`, failing when `rhs` is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, FieldError> {
        Ok(self * rhs.inv()?)
    }

    /// Maps transcript output to a field element.
    ///
    /// The first sixteen bytes are read as a little-endian `u128` and reduced
    /// modulo `p`; the bias is below `2^-96`.
    pub fn from_digest_bytes(bytes: &[u8; 32]) -> Self {
        let mut wide = [0u8; 16];
        wide.copy_from_slice(&bytes[..16]);
        let value = u128::from_le_bytes(wide) % (Self::MODULUS.value as u128);
        FieldElement(value as u64)
    }
}

/// Inverts every element of `values` with a single field inversion.
///
/// Fails with [`FieldError::DivisionByZero`] if any input is zero.
pub fn batch_inverse(values: &[FieldElement]) -> Result<Vec<FieldElement>, FieldError> {
    let mut prefix = Vec::with_capacity(values.len());
    let mut acc = FieldElement::ONE;
    for value in values {
        if value.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        prefix.push(acc);
        acc *= *value;
    }

    let mut inverse = acc.inv()?;
    let mut out = vec![FieldElement::ZERO; values.len()];
    for index in (0..values.len()).rev() {
        out[index] = prefix[index] * inverse;
        inverse *= values[index];
    }
    Ok(out)
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        FieldElement::new(value)
    }
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        FieldElement::new(value as u64)
    }
}

impl From<FieldElement> for u64 {
    fn from(value: FieldElement) -> Self {
        value.0
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = self.0 + rhs.0;
        if sum >= Self::MODULUS.value {
            FieldElement(sum - Self::MODULUS.value)
        } else {
            FieldElement(sum)
        }
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            FieldElement(self.0 - rhs.0)
        } else {
            FieldElement(self.0 + Self::MODULUS.value - rhs.0)
        }
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        FieldElement((self.0 * rhs.0) % Self::MODULUS.value)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            self
        } else {
            FieldElement(Self::MODULUS.value - self.0)
        }
    }
}

impl AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FieldElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FieldElement::ZERO, |acc, value| acc + value)
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FieldElement::ONE, |acc, value| acc * value)
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;
        FieldElement::from_canonical(value).map_err(serde::de::Error::custom)
    }
}

/// Trait defining serialization requirements for field elements.
pub trait CanonicalSerialize: Sized {
    /// Canonical serialization output type.
    type Bytes;

    /// Serializes the element into canonical little-endian bytes.
    fn to_bytes(&self) -> Self::Bytes;

    /// Deserializes from canonical little-endian bytes.
    fn from_bytes(bytes: &Self::Bytes) -> Result<Self, FieldError>;
}

impl CanonicalSerialize for FieldElement {
    type Bytes = [u8; 8];

    fn to_bytes(&self) -> Self::Bytes {
        self.0.to_le_bytes()
    }

    fn from_bytes(bytes: &Self::Bytes) -> Result<Self, FieldError> {
        FieldElement::from_canonical(u64::from_le_bytes(*bytes))
    }
}
