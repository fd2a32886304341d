use lamague_core::vector::Vector;

/// Outcome of a correction run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport {
    /// Final state.
    pub state: Vector,
    /// Number of `step` calls performed.
    pub iterations: usize,
    /// Euclidean displacement between successive states, one per iteration.
    pub displacements: Vec<f64>,
    /// True when the last displacement fell below the threshold.
    pub converged: bool,
}

impl ConvergenceReport {
    /// Empirical convergence rate λ ≈ last displacement / first displacement.
    ///
    /// `None` when no step ran or the first displacement was zero.
    pub fn convergence_rate(&self) -> Option<f64> {
        let first = *self.displacements.first()?;
        let last = *self.displacements.last()?;
        if first == 0.0 {
            return None;
        }
        Some(last / first)
    }

    /// Displacement of the last step, `None` if no step ran.
    pub fn final_displacement(&self) -> Option<f64> {
        self.displacements.last().copied()
    }
}
