/// Lamague version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Guard term added to denominators throughout the engines.
pub const EPSILON: f64 = 1e-6;

/// Minimum truth pressure for the foundation tier.
pub const FOUNDATION_MIN_PRESSURE: f64 = 1.5;

/// Minimum truth pressure for the middle tier.
pub const MIDDLE_MIN_PRESSURE: f64 = 1.2;

/// Margin a new block must exceed the weakest foundation block by to cascade.
pub const CASCADE_EPSILON: f64 = 0.1;

/// Evidence entries kept when a block is compressed during a cascade.
pub const COMPRESSED_EVIDENCE_LIMIT: usize = 3;

/// Content prefix marking a compressed block.
pub const COMPRESSED_PREFIX: &str = "[Compressed]";

/// Ledger operation label used for cascade reorganizations.
pub const CASCADE_OPERATION: &str = "cascade_reorganization";
