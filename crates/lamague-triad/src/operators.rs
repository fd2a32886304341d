//! Pure TRIAD operators.
//!
//! None of these touch kernel state, so they can be reused on any
//! anchor/coherence pair of matching dimension.

use lamague_core::constants::EPSILON;
use lamague_core::errors::NumericError;
use lamague_core::vector::{self, Vector};

/// Anchor projection: `(state · anchor) × anchor`.
///
/// Idempotent for a unit-length `anchor`.
pub fn anchor_projection(state: &[f64], anchor: &[f64]) -> Result<Vector, NumericError> {
    let projection = vector::dot(state, anchor)?;
    Ok(vector::scale(anchor, projection))
}

/// Unit-length pseudo-gradient pointing from `state` toward `coherence`.
///
/// ```text
/// g = (coherence − state) / (‖coherence − state‖ + ε)
/// ```
///
/// When `state == coherence` the difference is zero and so is `g`; the ε
/// term only keeps the division finite. No fallback direction is chosen.
pub fn coherence_gradient(state: &[f64], coherence: &[f64]) -> Result<Vector, NumericError> {
    let direction = vector::sub(coherence, state)?;
    let denom = vector::norm(&direction) + EPSILON;
    Ok(vector::scale(&direction, 1.0 / denom))
}

/// Ascent: `normalize(state + step_size × g)`.
pub fn ascend(state: &[f64], coherence: &[f64], step_size: f64) -> Result<Vector, NumericError> {
    let gradient = coherence_gradient(state, coherence)?;
    let ascended = vector::weighted_sum(state, 1.0, &gradient, step_size)?;
    vector::normalize(&ascended, "ascent operator")
}

/// Causal fold over recorded states.
///
/// With `t = history.len()`, the state recorded at index `s` gets weight
/// `exp(-(t - s))`, normalized so the weights sum to one. Returns
/// `current` unchanged when nothing has been recorded.
pub fn fold(history: &[Vector], current: &[f64]) -> Result<Vector, NumericError> {
    if history.is_empty() {
        return Ok(current.to_vec());
    }

    let t = history.len();
    let mut integrated = vec![0.0; current.len()];
    let mut total_weight = 0.0;
    for (s, past) in history.iter().enumerate() {
        vector::ensure_same_dim(current, past)?;
        let weight = (-((t - s) as f64)).exp();
        for (slot, x) in integrated.iter_mut().zip(past) {
            *slot += weight * x;
        }
        total_weight += weight;
    }

    Ok(vector::scale(&integrated, 1.0 / total_weight))
}

/// Drift from anchor: `1 − |state · anchor|`, clamped to [0, 1].
pub fn drift(state: &[f64], anchor: &[f64]) -> Result<f64, NumericError> {
    let alignment = vector::dot(state, anchor)?;
    Ok((1.0 - alignment.abs()).clamp(0.0, 1.0))
}
