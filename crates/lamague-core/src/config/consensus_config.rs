//! Configuration for the multi-agent consensus network.
//!
//! # Examples
//!
//! ```
//! use lamague_core::config::ConsensusConfig;
//!
//! let config = ConsensusConfig::default();
//! assert!((config.drift_threshold - 0.4).abs() < f64::EPSILON);
//! assert!((config.recovery_bound() - 0.2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Drift above which a Healthy/Aligned agent is moved to Grey. Default: 0.4.
    pub drift_threshold: f64,
    /// Fraction of `drift_threshold` a Grey agent must stay under to recover. Default: 0.5.
    pub recovery_factor: f64,
    /// Number of consecutive low-drift readings required for recovery. Default: 10.
    pub recovery_window: usize,
    /// Share of the consensus blended into each participating agent per round. Default: 0.1.
    pub blend_rate: f64,
    /// Rounds run by `iterate_consensus_default`. Default: 100.
    pub default_rounds: usize,
}

impl ConsensusConfig {
    /// Drift bound for Grey recovery (`drift_threshold * recovery_factor`).
    pub fn recovery_bound(&self) -> f64 {
        self.drift_threshold * self.recovery_factor
    }
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            drift_threshold: defaults::DEFAULT_DRIFT_THRESHOLD,
            recovery_factor: defaults::DEFAULT_RECOVERY_FACTOR,
            recovery_window: defaults::DEFAULT_RECOVERY_WINDOW,
            blend_rate: defaults::DEFAULT_BLEND_RATE,
            default_rounds: defaults::DEFAULT_CONSENSUS_ROUNDS,
        }
    }
}
