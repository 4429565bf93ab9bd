//! Generation parameters.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::placement::random::DEFAULT_MAX_ATTEMPTS;
use crate::placement::PlacementMode;
use crate::units::LinearUnit;

/// Configuration for generating a sample set.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateConfig {
    /// Horizontal grid spacing, in `unit`.
    pub spacing_x: f64,
    /// Vertical grid spacing, in `unit`.
    pub spacing_y: f64,
    /// Unit the spacing values are expressed in.
    pub unit: LinearUnit,
    /// Placement mode.
    pub mode: PlacementMode,
    /// Cap on rejection-sampling draws per cell/stand pair in random mode.
    pub max_sampling_attempts: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            spacing_x: 150.0,
            spacing_y: 150.0,
            unit: LinearUnit::Feet,
            mode: PlacementMode::Center,
            max_sampling_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GenerateConfig {
    /// Creates a new [`GenerateConfig`] with the given spacing in feet.
    pub fn new(spacing_x: f64, spacing_y: f64) -> Self {
        Self {
            spacing_x,
            spacing_y,
            ..Default::default()
        }
    }

    /// Sets both spacing values.
    pub fn with_spacing(mut self, spacing_x: f64, spacing_y: f64) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }

    /// Sets the unit of the spacing values.
    pub fn with_unit(mut self, unit: LinearUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the placement mode.
    pub fn with_mode(mut self, mode: PlacementMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the rejection-sampling cap.
    pub fn with_max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        for value in [self.spacing_x, self.spacing_y] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidSpacing { value });
            }
        }
        if self.max_sampling_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_sampling_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = GenerateConfig::new(6.0, 4.0)
            .with_unit(LinearUnit::Chains)
            .with_mode(PlacementMode::Random)
            .with_max_sampling_attempts(50);
        assert_eq!(config.spacing_x, 6.0);
        assert_eq!(config.spacing_y, 4.0);
        assert_eq!(config.unit, LinearUnit::Chains);
        assert_eq!(config.mode, PlacementMode::Random);
        assert_eq!(config.max_sampling_attempts, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_spacing_and_cap() {
        assert!(matches!(
            GenerateConfig::new(0.0, 10.0).validate(),
            Err(Error::InvalidSpacing { .. })
        ));
        assert!(matches!(
            GenerateConfig::new(10.0, f64::NAN).validate(),
            Err(Error::InvalidSpacing { .. })
        ));
        assert!(matches!(
            GenerateConfig::default()
                .with_max_sampling_attempts(0)
                .validate(),
            Err(Error::InvalidConfig(_))
        ));
    }
}
