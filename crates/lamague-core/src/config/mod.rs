//! Configuration for every Lamague engine.
//!
//! Each section is `#[serde(default)]`, so a partial (or empty) TOML document
//! yields a complete config with the values from [`defaults`].

pub mod consensus_config;
pub mod defaults;
pub mod ledger_config;
pub mod observability_config;
pub mod triad_config;

mod lamague_config;

pub use consensus_config::ConsensusConfig;
pub use lamague_config::LamagueConfig;
pub use ledger_config::LedgerConfig;
pub use observability_config::ObservabilityConfig;
pub use triad_config::TriadConfig;
