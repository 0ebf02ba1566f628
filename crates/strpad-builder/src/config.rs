//! Tunable sizing for [`StringBuilder`](crate::StringBuilder).

use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, Result};

/// Initial slot count used when no configuration is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 15;

/// Multiplier applied to the capacity on every reallocation.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

/// Sizing parameters for a builder.
///
/// Missing fields fall back to the defaults when deserializing, so a host
/// application can embed this in its own config and set only what it cares
/// about:
///
/// ```rust
/// use strpad_builder::BuilderConfig;
///
/// let config: BuilderConfig = serde_json::from_str(r#"{ "growth_factor": 2.0 }"#).unwrap();
/// assert_eq!(config.initial_capacity, 15);
/// assert_eq!(config.growth_factor, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Slots allocated up front. Zero is treated as one.
    pub initial_capacity: usize,
    /// Capacity multiplier, finite and greater than 1.0.
    pub growth_factor: f64,
}

impl BuilderConfig {
    pub fn new(initial_capacity: usize, growth_factor: f64) -> Self {
        Self {
            initial_capacity,
            growth_factor,
        }
    }

    /// Sets the initial capacity.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth factor.
    pub fn growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Checks that the growth factor can actually grow the buffer.
    pub fn validate(&self) -> Result<()> {
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(BuilderError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_CAPACITY, DEFAULT_GROWTH_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = BuilderConfig::default();
        assert_eq!(config.initial_capacity, 15);
        assert_eq!(config.growth_factor, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn chained_setters() {
        let config = BuilderConfig::default()
            .initial_capacity(4)
            .growth_factor(3.0);
        assert_eq!(config, BuilderConfig::new(4, 3.0));
    }

    #[test]
    fn rejects_factor_of_one() {
        let config = BuilderConfig::default().growth_factor(1.0);
        assert_eq!(
            config.validate(),
            Err(BuilderError::InvalidGrowthFactor(1.0))
        );
    }

    #[test]
    fn rejects_shrinking_factor() {
        assert!(BuilderConfig::new(8, 0.5).validate().is_err());
        assert!(BuilderConfig::new(8, -2.0).validate().is_err());
    }

    #[test]
    fn rejects_non_finite_factor() {
        assert!(BuilderConfig::new(8, f64::NAN).validate().is_err());
        assert!(BuilderConfig::new(8, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn zero_capacity_is_valid() {
        assert!(BuilderConfig::new(0, 1.5).validate().is_ok());
    }

    #[test]
    fn deserialize_empty_object_uses_defaults() {
        let config: BuilderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn serialize_roundtrips_fields() {
        let json = serde_json::to_value(BuilderConfig::new(32, 2.0)).unwrap();
        assert_eq!(json["initial_capacity"], 32);
        assert_eq!(json["growth_factor"], 2.0);
    }
}
