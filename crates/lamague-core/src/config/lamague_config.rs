//! Top-level Lamague configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConsensusConfig, LedgerConfig, ObservabilityConfig, TriadConfig};
use crate::errors::ConfigError;

/// Aggregates all sub-configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LamagueConfig {
    pub triad: TriadConfig,
    pub ledger: LedgerConfig,
    pub consensus: ConsensusConfig,
    pub observability: ObservabilityConfig,
}

impl LamagueConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate value ranges. The alpha + beta + gamma = 1 expectation is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let triad = &self.triad;
        check_range("triad.alpha", triad.alpha, 0.0..=1.0)?;
        check_positive("triad.step_size", triad.step_size)?;
        check_positive("triad.convergence_threshold", triad.convergence_threshold)?;
        if triad.max_iterations == 0 {
            return Err(invalid("triad.max_iterations", "must be at least 1"));
        }

        if !(self.ledger.spike_sigma >= 0.0 && self.ledger.spike_sigma.is_finite()) {
            return Err(invalid("ledger.spike_sigma", "must be a non-negative number"));
        }

        let consensus = &self.consensus;
        if !(consensus.drift_threshold > 0.0 && consensus.drift_threshold <= 1.0) {
            return Err(invalid("consensus.drift_threshold", "must be in (0.0, 1.0]"));
        }
        check_range("consensus.recovery_factor", consensus.recovery_factor, 0.0..=1.0)?;
        if !(consensus.blend_rate > 0.0 && consensus.blend_rate <= 1.0) {
            return Err(invalid("consensus.blend_rate", "must be in (0.0, 1.0]"));
        }
        if consensus.recovery_window == 0 {
            return Err(invalid("consensus.recovery_window", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn check_range(
    field: &str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!(
                "must be between {} and {}, got {}",
                range.start(),
                range.end(),
                value
            ),
        })
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}
