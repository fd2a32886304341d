use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use lamague_core::config::ConsensusConfig;
use lamague_core::errors::{ConsensusError, LamagueError, LamagueResult};
use lamague_core::models::{AgentId, AgentMode};
use lamague_core::tracing::events;
use lamague_core::vector::{self, Vector};

use crate::agent::Agent;
use crate::transitions::{self, ModeTransition};

/// Summary of an `iterate_consensus` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusRun {
    /// Rounds that ran to completion.
    pub rounds_completed: usize,
    /// Every mode change, in the order applied.
    pub transitions: Vec<ModeTransition>,
    /// Consensus of the last completed round.
    pub consensus: Option<Vector>,
    /// True when the run stopped early because no agent could form a consensus.
    pub halted: bool,
}

/// Population of agents converging on an emergent consensus.
///
/// There is no central authority: the consensus is the component-wise
/// mean of the Healthy and Aligned agents, recomputed every round.
#[derive(Debug, Clone, Default)]
pub struct AgentNetwork {
    agents: Vec<Agent>,
    consensus: Option<Vector>,
    config: ConsensusConfig,
}

impl AgentNetwork {
    /// Empty network with the default consensus config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty network driven by `config`.
    pub fn with_config(config: &ConsensusConfig) -> Self {
        Self {
            agents: Vec::new(),
            consensus: None,
            config: config.clone(),
        }
    }

    /// Append an agent. All agents must share one dimension; ids are not checked.
    pub fn add_agent(&mut self, agent: Agent) -> LamagueResult<()> {
        if let Some(first) = self.agents.first() {
            if first.dimension() != agent.dimension() {
                return Err(ConsensusError::DimensionMismatch {
                    agent: agent.id().to_string(),
                    expected: first.dimension(),
                    actual: agent.dimension(),
                }
                .into());
            }
        }
        self.agents.push(agent);
        Ok(())
    }

    /// Agents in insertion order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// First agent with `id`, in insertion order.
    pub fn agent(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    /// Agents currently in `mode`, in insertion order.
    pub fn agents_in_mode(&self, mode: AgentMode) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.mode() == mode).collect()
    }

    /// Consensus from the most recent `compute_consensus`.
    pub fn consensus(&self) -> Option<&[f64]> {
        self.consensus.as_deref()
    }

    /// Config the network was built with.
    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True when the network has no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Component-wise mean of all Healthy and Aligned agent states.
    ///
    /// Fails with [`ConsensusError::NoEligibleAgents`] when none participate;
    /// the previous consensus is kept in that case.
    pub fn compute_consensus(&mut self) -> LamagueResult<Vector> {
        let states: Vec<&[f64]> = self.participants().map(Agent::state).collect();
        if states.is_empty() {
            return Err(ConsensusError::NoEligibleAgents.into());
        }
        let consensus = vector::mean(states)?;
        self.consensus = Some(consensus.clone());
        Ok(consensus)
    }

    /// Measure every agent's drift and apply mode transitions.
    ///
    /// Each agent's drift history grows by one entry, Adversarial agents
    /// included.
    pub fn update_agent_modes(&mut self) -> LamagueResult<Vec<ModeTransition>> {
        let mut changes = Vec::new();
        for agent in &mut self.agents {
            let drift = agent.detect_drift()?;
            let from = agent.mode();
            let to = transitions::next_mode(agent, drift, &self.config);
            if to == from {
                continue;
            }

            match to {
                AgentMode::Grey => events::agent_entered_grey(agent.id(), from, drift),
                _ => events::agent_recovered(agent.id(), drift),
            }
            agent.set_mode(to);
            changes.push(ModeTransition {
                agent: agent.id().clone(),
                from,
                to,
                drift,
            });
        }
        Ok(changes)
    }

    /// Run `rounds` consensus rounds.
    ///
    /// Each round computes the consensus from the current modes, updates
    /// modes, then blends every agent still Healthy or Aligned toward the
    /// consensus by `blend_rate` and renormalizes. An agent that goes Grey
    /// this round is not blended. If no consensus can be formed the run
    /// stops and `halted` is set; rounds already completed are kept.
    #[instrument(skip(self), fields(agents = self.agents.len()))]
    pub fn iterate_consensus(&mut self, rounds: usize) -> LamagueResult<ConsensusRun> {
        let mut run = ConsensusRun {
            rounds_completed: 0,
            transitions: Vec::new(),
            consensus: None,
            halted: false,
        };

        for round in 0..rounds {
            let consensus = match self.compute_consensus() {
                Ok(c) => c,
                Err(LamagueError::Consensus(ConsensusError::NoEligibleAgents)) => {
                    events::consensus_unavailable(round, self.agents.len());
                    run.halted = true;
                    break;
                }
                Err(err) => return Err(err),
            };

            run.transitions.extend(self.update_agent_modes()?);

            let rate = self.config.blend_rate;
            for agent in self.agents.iter_mut().filter(|a| a.mode().participates()) {
                agent.blend_toward(&consensus, rate)?;
            }

            run.consensus = Some(consensus);
            run.rounds_completed += 1;
        }

        debug!(
            rounds_completed = run.rounds_completed,
            transitions = run.transitions.len(),
            "consensus run finished"
        );
        Ok(run)
    }

    /// `iterate_consensus` with the configured default round count.
    pub fn iterate_consensus_default(&mut self) -> LamagueResult<ConsensusRun> {
        self.iterate_consensus(self.config.default_rounds)
    }

    /// Mean squared distance of participating states from their centroid.
    ///
    /// `None` when no agent participates.
    pub fn dispersion(&self) -> LamagueResult<Option<f64>> {
        let states: Vec<&[f64]> = self.participants().map(Agent::state).collect();
        if states.is_empty() {
            return Ok(None);
        }
        let centroid = vector::mean(states.iter().copied())?;
        let mut total = 0.0;
        for state in &states {
            let d = vector::distance(state, &centroid)?;
            total += d * d;
        }
        Ok(Some(total / states.len() as f64))
    }

    /// Dot product of the last consensus with `reference`, `None` before any consensus.
    pub fn consensus_alignment(&self, reference: &[f64]) -> LamagueResult<Option<f64>> {
        match &self.consensus {
            Some(consensus) => Ok(Some(vector::dot(consensus, reference)?)),
            None => Ok(None),
        }
    }

    fn participants(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| a.mode().participates())
    }
}
