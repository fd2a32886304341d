//! # lamague-core
//!
//! Foundation crate for the Lamague engines.
//! Defines the shared data model, checked vector math, statistics helpers,
//! errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod stats;
pub mod tracing;
pub mod vector;

// Re-export the most commonly used types at the crate root.
pub use config::LamagueConfig;
pub use errors::{LamagueError, LamagueResult};
pub use models::{AgentId, AgentMode, Evidence, KnowledgeBlock, Tier};
pub use vector::Vector;
