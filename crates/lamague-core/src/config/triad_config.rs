use serde::{Deserialize, Serialize};

use super::defaults;

/// TRIAD kernel configuration.
///
/// `alpha`, `beta` and `gamma` are expected to sum to 1.0; this is not
/// enforced. Only `alpha` participates in a kernel step; the other two are
/// carried for callers that weight the operators themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriadConfig {
    /// Weight of the anchored projection in the blended state.
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Ascent step size used by `step`.
    pub step_size: f64,
    /// Displacement below which a correction run counts as converged.
    pub convergence_threshold: f64,
    /// Iteration budget for a correction run.
    pub max_iterations: usize,
}

impl Default for TriadConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            beta: defaults::DEFAULT_BETA,
            gamma: defaults::DEFAULT_GAMMA,
            step_size: defaults::DEFAULT_STEP_SIZE,
            convergence_threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
        }
    }
}
