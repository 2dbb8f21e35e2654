//! Weighted categorical sampling.
//!
//! Every draw is inverse-CDF over the input slice: one uniform number, one
//! pass over the cumulative sum, and the index where the cumulative mass
//! first exceeds the draw.  Zero-probability slots can never be returned.

use epi_core::SimRng;

use crate::{Action, ActionWeights, BehaviorError, BehaviorResult};

/// Tolerance on `sum(probs) == 1`.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Check that `probs` is a probability vector.
pub(crate) fn validate(probs: &[f64]) -> BehaviorResult<()> {
    let sum: f64 = probs.iter().sum();
    if probs.iter().any(|p| !p.is_finite() || *p < 0.0) || (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(BehaviorError::InvalidDistribution { sum });
    }
    Ok(())
}

/// Draw one outcome index from a probability vector.
///
/// Fails only if `probs` is not a probability vector, which is a
/// configuration error.
pub fn spin(probs: &[f64], rng: &mut SimRng) -> BehaviorResult<usize> {
    validate(probs)?;
    Ok(draw(probs, 1.0, rng.uniform()))
}

/// Draw an index with probability proportional to `weights[i]`.
///
/// Returns `None` when the total weight is zero (nothing to choose from).
/// Non-positive entries are never selected.
pub fn spin_weighted(weights: &[f64], rng: &mut SimRng) -> Option<usize> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if !(total > 0.0 && total.is_finite()) {
        return None;
    }
    Some(draw(weights, total, rng.uniform()))
}

/// Spin the first distribution whose condition holds.
///
/// Returns `Action::Nothing` without consuming randomness when no condition
/// holds.  The two slices must have equal length.
pub fn spin_first_match(
    conditions:    &[bool],
    distributions: &[&ActionWeights],
    rng:           &mut SimRng,
) -> BehaviorResult<Action> {
    if conditions.len() != distributions.len() {
        return Err(BehaviorError::LengthMismatch {
            conditions:    conditions.len(),
            distributions: distributions.len(),
        });
    }
    match conditions.iter().position(|&c| c) {
        Some(i) => Ok(distributions[i].sample(rng)),
        None => Ok(Action::Nothing),
    }
}

/// Inverse-CDF walk.  `u` is uniform in `[0, 1)` and is scaled by `total`.
pub(crate) fn draw(weights: &[f64], total: f64, u: f64) -> usize {
    let target = u * total;
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if target < cumulative {
            return i;
        }
    }
    // Rounding left `target` just past the final cumulative sum.
    last_positive
}
