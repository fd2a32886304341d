/// Energy ledger errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("audit export to {path} failed: {reason}")]
    ExportFailed { path: String, reason: String },
}
