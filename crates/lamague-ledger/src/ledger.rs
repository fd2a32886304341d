use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use lamague_core::config::LedgerConfig;
use lamague_core::errors::LamagueResult;
use lamague_core::tracing::events;

use crate::report::AuditReport;
use crate::violations::{self, Spike};

/// Free-form metadata attached to a ledger entry.
pub type LedgerContext = BTreeMap<String, serde_json::Value>;

/// One immutable ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    pub operation: String,
    pub context: LedgerContext,
    /// Running total including this entry.
    pub cumulative: f64,
}

/// Append-only energy log.
///
/// `spend` does not validate the sign of `amount`: negative amounts are
/// accepted and lower the running total.
#[derive(Debug, Clone, Default)]
pub struct EnergyLedger {
    log: Vec<LedgerEntry>,
    total_energy: f64,
    config: LedgerConfig,
}

impl EnergyLedger {
    /// Empty ledger with default spike settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty ledger using `config` for spike detection.
    pub fn with_config(config: &LedgerConfig) -> Self {
        Self {
            log: Vec::new(),
            total_energy: 0.0,
            config: config.clone(),
        }
    }

    /// Record `amount` spent on `operation` and return the new entry.
    pub fn spend(
        &mut self,
        amount: f64,
        operation: impl Into<String>,
        context: LedgerContext,
    ) -> &LedgerEntry {
        let cumulative = self.total_energy + amount;
        let entry = LedgerEntry {
            timestamp: Utc::now(),
            amount,
            operation: operation.into(),
            context,
            cumulative,
        };
        events::energy_spent(&entry.operation, amount, cumulative);

        self.total_energy = cumulative;
        self.log.push(entry);
        &self.log[self.log.len() - 1]
    }

    /// Running sum of every recorded amount.
    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    /// Entries in recording order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.log
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Entries whose amount exceeds `mean + spike_sigma × stddev_pop`.
    pub fn detect_spikes(&self) -> Vec<Spike> {
        let amounts: Vec<f64> = self.log.iter().map(|e| e.amount).collect();
        violations::detect_spikes(
            &amounts,
            self.config.spike_sigma,
            self.config.min_entries_for_statistics,
        )
    }

    /// Human-readable spike descriptions. Empty with fewer than two entries.
    pub fn detect_violations(&self) -> Vec<String> {
        self.detect_spikes().iter().map(Spike::describe).collect()
    }

    /// Snapshot of the whole ledger plus detected violations.
    pub fn audit(&self) -> AuditReport {
        let spikes = self.detect_spikes();
        for spike in &spikes {
            events::energy_spike_detected(spike.index, spike.amount, spike.limit);
        }
        debug!(
            entries = self.log.len(),
            total_energy = self.total_energy,
            spikes = spikes.len(),
            "ledger audited"
        );
        AuditReport {
            total_energy: self.total_energy,
            num_operations: self.log.len(),
            operations: self.log.clone(),
            violations: spikes.iter().map(Spike::describe).collect(),
        }
    }

    /// Write the audit report to `path` as pretty-printed JSON.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn export_json(&self, path: &Path) -> LamagueResult<()> {
        self.audit().write_json(path)?;
        info!(entries = self.log.len(), "ledger exported");
        Ok(())
    }
}
