//! # lamague-consensus
//!
//! Decentralized vector consensus. Each agent tracks its drift from a
//! private anchor; agents that drift too far are quarantined in Grey mode
//! until they show sustained recovery, and the remaining agents are pulled
//! toward their shared mean a little every round.

pub mod agent;
pub mod network;
pub mod transitions;

pub use agent::Agent;
pub use network::{AgentNetwork, ConsensusRun};
pub use transitions::ModeTransition;
