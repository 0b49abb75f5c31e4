use super::StarkConfig;
use crate::field::FieldElement;

/// Smallest supported trace domain.
pub const MIN_DOMAIN_SIZE: usize = 4;
/// Smallest supported blowup factor.
pub const MIN_DOMAIN_EX_MULT: usize = 2;
/// Largest supported `log2(domain_size · domain_ex_mult)`.
pub const MAX_EXTENDED_LOG2: u32 = FieldElement::MODULUS.two_adicity;

/// Error enumeration for configuration validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `domain_size` is not a power of two.
    #[error("domain_size {got} is not a power of two")]
    DomainSizeNotPowerOfTwo {
        /// Supplied value.
        got: usize,
    },
    /// `domain_size` below [`MIN_DOMAIN_SIZE`].
    #[error("domain_size {got} is below the minimum of {min}")]
    DomainTooSmall {
        /// Minimum accepted value.
        min: usize,
        /// Supplied value.
        got: usize,
    },
    /// `domain_ex_mult` is not a power of two.
    #[error("domain_ex_mult {got} is not a power of two")]
    BlowupNotPowerOfTwo {
        /// Supplied value.
        got: usize,
    },
    /// `domain_ex_mult` below [`MIN_DOMAIN_EX_MULT`].
    #[error("domain_ex_mult {got} is below the minimum of {min}")]
    BlowupTooSmall {
        /// Minimum accepted value.
        min: usize,
        /// Supplied value.
        got: usize,
    },
    /// The extended domain does not fit the two-adic subgroup.
    #[error("extended domain 2^{got_log2} exceeds the field's 2^{max_log2} subgroup")]
    ExtendedDomainTooLarge {
        /// Largest supported exponent.
        max_log2: u32,
        /// Requested exponent.
        got_log2: u32,
    },
}

/// Validates every configuration invariant.
pub fn validate(config: &StarkConfig) -> Result<(), ConfigError> {
    validate_domain_size(config.domain_size)?;
    validate_blowup(config.domain_ex_mult)?;
    let got_log2 = config.domain_size.trailing_zeros() + config.domain_ex_mult.trailing_zeros();
    if got_log2 > MAX_EXTENDED_LOG2 {
        return Err(ConfigError::ExtendedDomainTooLarge {
            max_log2: MAX_EXTENDED_LOG2,
            got_log2,
        });
    }
    Ok(())
}

fn validate_domain_size(size: usize) -> Result<(), ConfigError> {
    if !size.is_power_of_two() {
        return Err(ConfigError::DomainSizeNotPowerOfTwo { got: size });
    }
    if size < MIN_DOMAIN_SIZE {
        return Err(ConfigError::DomainTooSmall {
            min: MIN_DOMAIN_SIZE,
            got: size,
        });
    }
    Ok(())
}

fn validate_blowup(mult: usize) -> Result<(), ConfigError> {
    if !mult.is_power_of_two() {
        return Err(ConfigError::BlowupNotPowerOfTwo { got: mult });
    }
    if mult < MIN_DOMAIN_EX_MULT {
        return Err(ConfigError::BlowupTooSmall {
            min: MIN_DOMAIN_EX_MULT,
            got: mult,
        });
    }
    Ok(())
}
