//! # lamague-triad
//!
//! Three-fold iterative drift correction for a single state vector.
//! Each step anchors the state, ascends toward a coherence target, and folds
//! the result into an exponentially weighted memory of past states.

pub mod convergence;
pub mod kernel;
pub mod operators;

pub use convergence::ConvergenceReport;
pub use kernel::TriadKernel;
