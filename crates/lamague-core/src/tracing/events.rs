//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

use crate::models::{AgentId, AgentMode, Tier};

/// Log a ledger expenditure.
pub fn energy_spent(operation: &str, amount: f64, cumulative: f64) {
    ::tracing::debug!(
        event = "energy_spent",
        operation = %operation,
        amount,
        cumulative,
        "energy spent"
    );
}

/// Log a ledger entry flagged as an anomalous spike.
pub fn energy_spike_detected(index: usize, amount: f64, limit: f64) {
    ::tracing::warn!(
        event = "energy_spike_detected",
        index,
        amount,
        limit,
        "unusual energy spike"
    );
}

/// Log placement of a block into a tier.
pub fn block_placed(content: &str, tier: Tier, truth_pressure: f64) {
    ::tracing::debug!(
        event = "block_placed",
        content = %content,
        tier = %tier,
        truth_pressure,
        "block placed"
    );
}

/// Log a completed cascade.
pub fn cascade_executed(content: &str, demoted: usize, entropy_before: f64, entropy_after: f64) {
    ::tracing::info!(
        event = "cascade_executed",
        content = %content,
        demoted,
        entropy_before,
        entropy_after,
        "cascade executed"
    );
}

/// Log a cascade that was rolled back because it did not reduce entropy.
pub fn cascade_rejected(content: &str, entropy_before: f64, entropy_after: f64) {
    ::tracing::error!(
        event = "cascade_rejected",
        content = %content,
        entropy_before,
        entropy_after,
        "cascade increased entropy"
    );
}

/// Log an agent entering Grey mode.
pub fn agent_entered_grey(agent: &AgentId, from: AgentMode, drift: f64) {
    ::tracing::warn!(
        event = "agent_entered_grey",
        agent = %agent,
        from = %from,
        drift,
        "agent entering grey mode"
    );
}

/// Log an agent recovering from Grey mode.
pub fn agent_recovered(agent: &AgentId, drift: f64) {
    ::tracing::info!(
        event = "agent_recovered",
        agent = %agent,
        drift,
        "agent recovered from grey mode"
    );
}

/// Log a consensus run aborted for lack of eligible agents.
pub fn consensus_unavailable(round: usize, agents: usize) {
    ::tracing::warn!(
        event = "consensus_unavailable",
        round,
        agents,
        "no healthy agents, cannot compute consensus"
    );
}

/// Log a converged correction run.
pub fn triad_converged(iterations: usize, displacement: f64) {
    ::tracing::info!(
        event = "triad_converged",
        iterations,
        displacement,
        "triad correction converged"
    );
}

/// Log a correction run that used its whole iteration budget.
pub fn triad_budget_exhausted(iterations: usize, displacement: f64) {
    ::tracing::warn!(
        event = "triad_budget_exhausted",
        iterations,
        displacement,
        "triad correction did not converge"
    );
}
