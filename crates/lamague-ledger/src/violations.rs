//! Statistical spike detection over ledger amounts.

use lamague_core::stats;

/// A ledger entry whose amount exceeds the spike limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Spike {
    /// Position in the ledger.
    pub index: usize,
    pub amount: f64,
    /// `mean + sigma × stddev_pop` at detection time.
    pub limit: f64,
}

impl Spike {
    /// Human-readable line used in `AuditReport::violations`.
    pub fn describe(&self) -> String {
        format!(
            "Operation {}: Unusual energy spike ({:.2})",
            self.index, self.amount
        )
    }
}

/// Flag amounts strictly greater than `mean + sigma × stddev_pop`.
///
/// Returns nothing when fewer than `min_entries` (and never fewer than two)
/// amounts are available.
pub fn detect_spikes(amounts: &[f64], sigma: f64, min_entries: usize) -> Vec<Spike> {
    if amounts.len() < min_entries.max(2) {
        return Vec::new();
    }
    let (Some(mean), Some(std_dev)) = (stats::mean(amounts), stats::population_std_dev(amounts))
    else {
        return Vec::new();
    };
    let limit = mean + sigma * std_dev;

    amounts
        .iter()
        .enumerate()
        .filter(|(_, amount)| **amount > limit)
        .map(|(index, amount)| Spike {
            index,
            amount: *amount,
            limit,
        })
        .collect()
}
