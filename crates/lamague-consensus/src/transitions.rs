//! Agent mode state machine.
//!
//! ```text
//! Healthy/Aligned ──drift > threshold──▶ Grey
//! Grey ──drift < bound, last `window` readings < bound──▶ Healthy
//! Adversarial: terminal, never transitions
//! ```

use serde::{Deserialize, Serialize};

use lamague_core::config::ConsensusConfig;
use lamague_core::models::{AgentId, AgentMode};

use crate::agent::Agent;

/// A mode change applied during `update_agent_modes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeTransition {
    pub agent: AgentId,
    pub from: AgentMode,
    pub to: AgentMode,
    /// Drift reading that triggered the change.
    pub drift: f64,
}

/// Mode `agent` should move to given its latest drift reading.
///
/// `drift` must already be the last entry of the agent's history.
pub fn next_mode(agent: &Agent, drift: f64, config: &ConsensusConfig) -> AgentMode {
    let bound = config.recovery_bound();
    match agent.mode() {
        AgentMode::Adversarial => AgentMode::Adversarial,
        AgentMode::Healthy | AgentMode::Aligned if drift > config.drift_threshold => {
            AgentMode::Grey
        }
        AgentMode::Grey
            if drift < bound && agent.sustained_below(config.recovery_window, bound) =>
        {
            AgentMode::Healthy
        }
        mode => mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(mode: AgentMode, history: Vec<f64>) -> Agent {
        Agent::new("t", &[1.0, 0.0], &[1.0, 0.0], mode)
            .unwrap()
            .with_drift_history(history)
    }

    #[test]
    fn adversarial_is_terminal() {
        let config = ConsensusConfig::default();
        let a = agent(AgentMode::Adversarial, vec![0.0; 20]);
        assert_eq!(next_mode(&a, 0.0, &config), AgentMode::Adversarial);
        assert_eq!(next_mode(&a, 1.0, &config), AgentMode::Adversarial);
    }

    #[test]
    fn threshold_is_exclusive() {
        let config = ConsensusConfig::default();
        let a = agent(AgentMode::Aligned, vec![0.4]);
        assert_eq!(next_mode(&a, 0.4, &config), AgentMode::Aligned);
        assert_eq!(next_mode(&a, 0.41, &config), AgentMode::Grey);
    }

    #[test]
    fn grey_recovers_to_healthy_not_aligned() {
        let config = ConsensusConfig::default();
        let a = agent(AgentMode::Grey, vec![0.1; 10]);
        assert_eq!(next_mode(&a, 0.1, &config), AgentMode::Healthy);
    }

    #[test]
    fn grey_between_bounds_stays_grey() {
        let config = ConsensusConfig::default();
        let a = agent(AgentMode::Grey, vec![0.3; 10]);
        assert_eq!(next_mode(&a, 0.3, &config), AgentMode::Grey);
    }
}
