use serde::{Deserialize, Serialize};

use super::defaults;

/// Energy ledger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// An entry is a spike when it exceeds `mean + spike_sigma * stddev`.
    pub spike_sigma: f64,
    /// Below this many entries no spike statistics are computed.
    pub min_entries_for_statistics: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            spike_sigma: defaults::DEFAULT_SPIKE_SIGMA,
            min_entries_for_statistics: defaults::DEFAULT_MIN_ENTRIES_FOR_STATISTICS,
        }
    }
}
