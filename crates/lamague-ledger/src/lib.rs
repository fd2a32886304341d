//! # lamague-ledger
//!
//! Append-only accounting of energy spent by engine operations.
//! Entries carry a running cumulative total; audits flag statistical spikes.

pub mod ledger;
pub mod report;
pub mod violations;

pub use ledger::{EnergyLedger, LedgerContext, LedgerEntry};
pub use report::AuditReport;
pub use violations::Spike;
