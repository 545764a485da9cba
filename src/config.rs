use crate::error::{Result, VoronoiError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default padding, as a fraction of the site extent on each axis.
pub const DEFAULT_PADDING_FACTOR: f64 = 0.2;
/// Default floor for the extent used to compute padding.
pub const DEFAULT_MIN_SIZE: f64 = 10.0;

/// Controls how the bounding box around the sites is padded.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoundsConfig {
    /// Padding added on both sides of an axis, relative to that axis' extent.
    pub padding_factor: f64,
    /// Minimum extent used for padding, keeps collinear site sets from producing a flat box.
    pub min_size: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            padding_factor: DEFAULT_PADDING_FACTOR,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl BoundsConfig {
    pub fn validate(&self) -> Result<()> {
        // Without padding, collinear sites span a box of zero area.
        if !self.padding_factor.is_finite() || self.padding_factor <= 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "padding factor must be finite and positive, got {}",
                self.padding_factor
            )));
        }
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "minimum box size must be finite and positive, got {}",
                self.min_size
            )));
        }
        Ok(())
    }
}

/// Settings for a diagram build.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiagramConfig {
    pub bounds: BoundsConfig,
    /// Build cells on the rayon thread pool.
    pub parallel: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            bounds: BoundsConfig::default(),
            parallel: true,
        }
    }
}

impl DiagramConfig {
    pub fn with_padding_factor(mut self, padding_factor: f64) -> Self {
        self.bounds.padding_factor = padding_factor;
        self
    }

    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.bounds.min_size = min_size;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DiagramConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.parallel);
        assert_eq!(config.bounds.padding_factor, DEFAULT_PADDING_FACTOR);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let negative = DiagramConfig::default().with_padding_factor(-0.1);
        assert!(matches!(negative.validate(), Err(VoronoiError::InvalidConfig(_))));

        let flat = DiagramConfig::default().with_min_size(0.0);
        assert!(matches!(flat.validate(), Err(VoronoiError::InvalidConfig(_))));

        let nan = DiagramConfig::default().with_min_size(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_zero_padding_is_rejected() {
        let unpadded = DiagramConfig::default().with_padding_factor(0.0);
        assert!(matches!(unpadded.validate(), Err(VoronoiError::InvalidConfig(_))));

        let tiny = DiagramConfig::default().with_padding_factor(1e-6);
        assert!(tiny.validate().is_ok());
    }
}
