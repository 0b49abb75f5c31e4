//! Protocol configuration: trace domain size `N` and blowup factor `B`.
//!
//! Everything else (trace length, domains, number of FRI folds) is derived.
//! Deserialization runs the same validation as [`StarkConfigBuilder::build`].

mod builder;
mod validate;

use serde::{Deserialize, Serialize};

use crate::fft::LowDegreeExtension;
use crate::field::{DomainError, FieldElement};

pub use builder::StarkConfigBuilder;
pub use validate::{ConfigError, MAX_EXTENDED_LOG2, MIN_DOMAIN_EX_MULT, MIN_DOMAIN_SIZE};

/// Validated protocol configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStarkConfig")]
pub struct StarkConfig {
    domain_size: usize,
    domain_ex_mult: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStarkConfig {
    domain_size: usize,
    domain_ex_mult: usize,
}

impl TryFrom<RawStarkConfig> for StarkConfig {
    type Error = ConfigError;

    fn try_from(raw: RawStarkConfig) -> Result<Self, Self::Error> {
        StarkConfigBuilder::new()
            .domain_size(raw.domain_size)
            .domain_ex_mult(raw.domain_ex_mult)
            .build()
    }
}

impl Default for StarkConfig {
    fn default() -> Self {
        Self {
            domain_size: Self::DEFAULT_DOMAIN_SIZE,
            domain_ex_mult: Self::DEFAULT_DOMAIN_EX_MULT,
        }
    }
}

impl StarkConfig {
    /// Default trace domain size.
    pub const DEFAULT_DOMAIN_SIZE: usize = 1024;
    /// Default blowup factor.
    pub const DEFAULT_DOMAIN_EX_MULT: usize = 8;

    /// Starts a builder with the defaults.
    pub fn builder() -> StarkConfigBuilder {
        StarkConfigBuilder::new()
    }

    /// Re-checks every invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate::validate(self)
    }

    /// Trace domain size `N`.
    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    /// Blowup factor `B`.
    pub fn domain_ex_mult(&self) -> usize {
        self.domain_ex_mult
    }

    /// Number of trace values the prover takes: `N - 1`.
    pub fn trace_length(&self) -> usize {
        self.domain_size - 1
    }

    /// Extended domain size `N · B`.
    pub fn extended_size(&self) -> usize {
        self.domain_size * self.domain_ex_mult
    }

    /// Number of FRI folds, `log2(N)`.
    pub fn fri_folds(&self) -> usize {
        self.domain_size.trailing_zeros() as usize
    }

    /// Trace subgroup of order `N` and the coset `5 · ⟨h⟩` of order `N · B`.
    pub fn lde(&self) -> Result<LowDegreeExtension, DomainError> {
        LowDegreeExtension::new(self.domain_size, self.domain_ex_mult, FieldElement::GENERATOR)
    }
}
