use tracing::{debug, instrument, trace};

use lamague_core::config::TriadConfig;
use lamague_core::errors::LamagueResult;
use lamague_core::tracing::events;
use lamague_core::vector::{self, Vector};

use crate::convergence::ConvergenceReport;
use crate::operators;

/// Iterative drift-correction operator over a single state vector.
///
/// Owns a fixed unit anchor, a fixed coherence target, the operator
/// weights, and an append-only history of ascended states that feeds the
/// fold step.
#[derive(Debug, Clone)]
pub struct TriadKernel {
    anchor: Vector,
    coherence: Vector,
    alpha: f64,
    beta: f64,
    gamma: f64,
    step_size: f64,
    convergence_threshold: f64,
    max_iterations: usize,
    history: Vec<Vector>,
}

impl TriadKernel {
    /// Create a kernel with the default weights (α=0.4, β=0.3, γ=0.3).
    pub fn new(anchor: &[f64], coherence: &[f64]) -> LamagueResult<Self> {
        Self::with_config(anchor, coherence, &TriadConfig::default())
    }

    /// Create a kernel from a config section.
    ///
    /// The anchor is normalized to unit length; the coherence target is
    /// stored as given. Both must be finite and of equal dimension.
    pub fn with_config(
        anchor: &[f64],
        coherence: &[f64],
        config: &TriadConfig,
    ) -> LamagueResult<Self> {
        vector::ensure_finite(anchor, "anchor")?;
        vector::ensure_finite(coherence, "coherence target")?;
        vector::ensure_same_dim(anchor, coherence)?;
        let anchor = vector::normalize(anchor, "anchor")?;

        Ok(Self {
            anchor,
            coherence: coherence.to_vec(),
            alpha: config.alpha,
            beta: config.beta,
            gamma: config.gamma,
            step_size: config.step_size,
            convergence_threshold: config.convergence_threshold,
            max_iterations: config.max_iterations,
            history: Vec::new(),
        })
    }

    /// Unit-length anchor.
    pub fn anchor(&self) -> &[f64] {
        &self.anchor
    }

    /// Coherence target as given.
    pub fn coherence(&self) -> &[f64] {
        &self.coherence
    }

    /// Vector dimension.
    pub fn dimension(&self) -> usize {
        self.anchor.len()
    }

    /// (α, β, γ).
    pub fn weights(&self) -> (f64, f64, f64) {
        (self.alpha, self.beta, self.gamma)
    }

    /// Ascended states recorded by `step`, oldest first.
    pub fn history(&self) -> &[Vector] {
        &self.history
    }

    /// Project `state` onto the anchor. Pure and idempotent.
    pub fn anchor_operator(&self, state: &[f64]) -> LamagueResult<Vector> {
        Ok(operators::anchor_projection(state, &self.anchor)?)
    }

    /// Move `state` one `step_size` toward the coherence target and renormalize.
    ///
    /// If `state` equals the coherence target exactly, the gradient is the
    /// zero vector and the result is just `state` normalized.
    pub fn ascent_operator(&self, state: &[f64], step_size: f64) -> LamagueResult<Vector> {
        Ok(operators::ascend(state, &self.coherence, step_size)?)
    }

    /// Exponential-memory blend over the recorded history.
    pub fn fold_operator(&self, current_state: &[f64]) -> LamagueResult<Vector> {
        Ok(operators::fold(&self.history, current_state)?)
    }

    /// One iteration: anchor, blend, ascend, record, fold.
    ///
    /// ```text
    /// anchored = Ao(state)
    /// ascended = Φ↑(α·anchored + (1−α)·state)
    /// history.push(ascended)
    /// return Ψ(ascended)
    /// ```
    ///
    /// Grows the history by exactly one entry on success.
    pub fn step(&mut self, state: &[f64]) -> LamagueResult<Vector> {
        let anchored = self.anchor_operator(state)?;
        let blended = vector::weighted_sum(&anchored, self.alpha, state, 1.0 - self.alpha)?;
        let ascended = self.ascent_operator(&blended, self.step_size)?;

        self.history.push(ascended);
        let current = &self.history[self.history.len() - 1];
        Ok(operators::fold(&self.history, current)?)
    }

    /// Drift from the anchor in [0, 1]. Does not read or touch the history.
    pub fn detect_drift(&self, state: &[f64]) -> LamagueResult<f64> {
        Ok(operators::drift(state, &self.anchor)?)
    }

    /// Run `correct_until_converged` with the configured threshold and budget.
    pub fn correct(&mut self, initial_state: &[f64]) -> LamagueResult<ConvergenceReport> {
        self.correct_until_converged(initial_state, self.convergence_threshold, self.max_iterations)
    }

    /// Apply `step` until the displacement between successive states drops
    /// below `threshold`, or `max_iterations` steps have run.
    #[instrument(skip(self, initial_state), fields(dim = initial_state.len()))]
    pub fn correct_until_converged(
        &mut self,
        initial_state: &[f64],
        threshold: f64,
        max_iterations: usize,
    ) -> LamagueResult<ConvergenceReport> {
        vector::ensure_finite(initial_state, "initial state")?;
        vector::ensure_same_dim(&self.anchor, initial_state)?;

        let mut state = initial_state.to_vec();
        let mut displacements = Vec::with_capacity(max_iterations.min(1024));

        for iteration in 0..max_iterations {
            let next = self.step(&state)?;
            let displacement = vector::distance(&next, &state)?;
            displacements.push(displacement);
            trace!(iteration, displacement, "triad step");

            if displacement < threshold {
                events::triad_converged(iteration + 1, displacement);
                return Ok(ConvergenceReport {
                    state: next,
                    iterations: iteration + 1,
                    displacements,
                    converged: true,
                });
            }
            state = next;
        }

        let last = displacements.last().copied().unwrap_or(0.0);
        if max_iterations > 0 {
            events::triad_budget_exhausted(max_iterations, last);
        } else {
            debug!("correction run with zero iteration budget");
        }
        Ok(ConvergenceReport {
            state,
            iterations: max_iterations,
            displacements,
            converged: false,
        })
    }
}
