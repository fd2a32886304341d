use serde::{Deserialize, Serialize};

use lamague_core::errors::{LamagueResult, NumericError};
use lamague_core::models::{AgentId, AgentMode};
use lamague_core::vector::{self, Vector};
use lamague_triad::operators;

/// A participant in the consensus network.
///
/// `state` and `anchor` are unit vectors of the same dimension. The drift
/// history only grows; every call to [`Agent::detect_drift`] appends to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    state: Vector,
    anchor: Vector,
    #[serde(default)]
    mode: AgentMode,
    #[serde(default)]
    drift_history: Vec<f64>,
}

impl Agent {
    /// Create an agent. `state` and `anchor` are normalized to unit length.
    pub fn new(
        id: impl Into<AgentId>,
        state: &[f64],
        anchor: &[f64],
        mode: AgentMode,
    ) -> LamagueResult<Self> {
        vector::ensure_finite(state, "agent state")?;
        vector::ensure_finite(anchor, "agent anchor")?;
        vector::ensure_same_dim(anchor, state)?;

        Ok(Self {
            id: id.into(),
            state: vector::normalize(state, "agent state")?,
            anchor: vector::normalize(anchor, "agent anchor")?,
            mode,
            drift_history: Vec::new(),
        })
    }

    /// Override the starting mode.
    pub fn with_mode(mut self, mode: AgentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Restore previously recorded drift readings, oldest first.
    pub fn with_drift_history(mut self, history: Vec<f64>) -> Self {
        self.drift_history = history;
        self
    }

    /// Agent identifier.
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// Current unit-length state.
    pub fn state(&self) -> &[f64] {
        &self.state
    }

    /// Unit anchor the agent drifts away from.
    pub fn anchor(&self) -> &[f64] {
        &self.anchor
    }

    /// Current mode.
    pub fn mode(&self) -> AgentMode {
        self.mode
    }

    /// Every drift reading so far, oldest first.
    pub fn drift_history(&self) -> &[f64] {
        &self.drift_history
    }

    /// Vector dimension.
    pub fn dimension(&self) -> usize {
        self.state.len()
    }

    /// Measure drift from the agent's anchor and record it.
    pub fn detect_drift(&mut self) -> LamagueResult<f64> {
        let drift = operators::drift(&self.state, &self.anchor)?;
        self.drift_history.push(drift);
        Ok(drift)
    }

    /// True when at least `window` readings exist and the last `window` are all below `bound`.
    pub fn sustained_below(&self, window: usize, bound: f64) -> bool {
        let len = self.drift_history.len();
        len >= window && self.drift_history[len - window..].iter().all(|d| *d < bound)
    }

    pub(crate) fn set_mode(&mut self, mode: AgentMode) {
        self.mode = mode;
    }

    /// `state = normalize((1 − rate)·state + rate·target)`.
    pub(crate) fn blend_toward(&mut self, target: &[f64], rate: f64) -> Result<(), NumericError> {
        let blended = vector::weighted_sum(&self.state, 1.0 - rate, target, rate)?;
        self.state = vector::normalize(&blended, "agent blend")?;
        Ok(())
    }
}
