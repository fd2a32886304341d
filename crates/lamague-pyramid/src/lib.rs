//! # lamague-pyramid
//!
//! Tiered knowledge store. Blocks are placed by truth pressure into
//! foundation, middle, or edge; a sufficiently stronger newcomer triggers a
//! cascade that compresses and demotes the whole foundation, logs the
//! reorganization energy, and must reduce total entropy.

pub mod cascade;
pub mod compression;

pub use cascade::{CascadeOutcome, PyramidCascade};
pub use compression::compress_block;
