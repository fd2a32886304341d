use std::path::Path;

use serde::{Deserialize, Serialize};

use lamague_core::errors::{LamagueResult, LedgerError};

use crate::ledger::LedgerEntry;

/// Audit snapshot of an energy ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub total_energy: f64,
    pub num_operations: usize,
    pub operations: Vec<LedgerEntry>,
    pub violations: Vec<String>,
}

impl AuditReport {
    /// True when the audit flagged at least one spike.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> LamagueResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the pretty-printed report to `path`.
    pub fn write_json(&self, path: &Path) -> LamagueResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| LedgerError::ExportFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
