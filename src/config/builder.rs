use super::validate::ConfigError;
use super::StarkConfig;

/// Builder used to assemble a validated [`StarkConfig`].
///
/// | Field | Default |
/// |-------|---------|
/// | `domain_size` | `1024` |
/// | `domain_ex_mult` | `8` |
#[derive(Debug, Clone)]
pub struct StarkConfigBuilder {
    domain_size: usize,
    domain_ex_mult: usize,
}

impl StarkConfigBuilder {
    /// Returns a builder initialised with the defaults.
    pub fn new() -> Self {
        Self {
            domain_size: StarkConfig::DEFAULT_DOMAIN_SIZE,
            domain_ex_mult: StarkConfig::DEFAULT_DOMAIN_EX_MULT,
        }
    }

    /// Sets the trace domain size `N`.
    pub fn domain_size(mut self, size: usize) -> Self {
        self.domain_size = size;
        self
    }

    /// Sets the blowup factor `B`.
    pub fn domain_ex_mult(mut self, mult: usize) -> Self {
        self.domain_ex_mult = mult;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<StarkConfig, ConfigError> {
        let config = StarkConfig {
            domain_size: self.domain_size,
            domain_ex_mult: self.domain_ex_mult,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for StarkConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
