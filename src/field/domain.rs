//! Multiplicative cosets `offset · ⟨ω⟩` of the two-adic subgroups of `F_p`.

use super::{FieldElement, FieldError};

/// Largest supported subgroup, `2^30`.
pub const MAX_LOG2_SIZE: u32 = FieldElement::MODULUS.two_adicity;

/// Errors raised when building or indexing evaluation domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Size is not a power of two dividing the group order.
    #[error("unsupported domain size {size}")]
    UnsupportedSize {
        /// Requested size.
        size: usize,
    },
    /// Index is not below the domain size.
    #[error("domain index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Domain size.
        size: usize,
    },
    /// Input vector length does not match the domain.
    #[error("expected {expected} values, got {got}")]
    LengthMismatch {
        /// Domain size.
        expected: usize,
        /// Provided length.
        got: usize,
    },
    /// Underlying field failure (a zero denominator).
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Evaluation domain described by an offset and a subgroup generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    offset: FieldElement,
    generator: FieldElement,
    size: usize,
    log2_size: u32,
}

impl Domain {
    /// Subgroup `⟨ω⟩` of order `size` (offset one).
    pub fn subgroup(size: usize) -> Result<Self, DomainError> {
        Self::coset(FieldElement::ONE, size)
    }

    /// Coset `offset · ⟨ω⟩` of order `size`.
    pub fn coset(offset: FieldElement, size: usize) -> Result<Self, DomainError> {
        if !size.is_power_of_two() || size.trailing_zeros() > MAX_LOG2_SIZE || offset.is_zero() {
            return Err(DomainError::UnsupportedSize { size });
        }
        let generator = FieldElement::GENERATOR.pow(FieldElement::GROUP_ORDER / size as u64);
        Ok(Self {
            offset,
            generator,
            size,
            log2_size: size.trailing_zeros(),
        })
    }

    /// Number of points.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// `log2(size)`.
    pub const fn log2_size(&self) -> u32 {
        self.log2_size
    }

    /// Coset offset.
    pub const fn offset(&self) -> FieldElement {
        self.offset
    }

    /// Generator `ω` of the underlying subgroup.
    pub const fn generator(&self) -> FieldElement {
        self.generator
    }

    /// Returns `offset · ω^index`.
    pub fn element(&self, index: usize) -> Result<FieldElement, DomainError> {
        if index >= self.size {
            return Err(DomainError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(self.offset * self.generator.pow(index as u64))
    }

    /// All points in natural order.
    pub fn elements(&self) -> Vec<FieldElement> {
        let mut out = Vec::with_capacity(self.size);
        let mut current = self.offset;
        for _ in 0..self.size {
            out.push(current);
            current *= self.generator;
        }
        out
    }

    /// The domain obtained by squaring every point; half the size.
    ///
    /// Fails for domains of size one.
    pub fn squared(&self) -> Result<Self, DomainError> {
        if self.size < 2 {
            return Err(DomainError::UnsupportedSize { size: self.size / 2 });
        }
        Ok(Self {
            offset: self.offset.square(),
            generator: self.generator.square(),
            size: self.size / 2,
            log2_size: self.log2_size - 1,
        })
    }

    /// Evaluates the vanishing polynomial of the plain subgroup, `x^size - 1`.
    pub fn vanishing_at(&self, point: FieldElement) -> FieldElement {
        point.pow(self.size as u64) - FieldElement::ONE
    }
}
