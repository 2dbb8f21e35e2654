//! A no-op behavior model: agents never act.

use epi_agent::Agent;
use epi_core::SimRng;

use crate::{Action, BehaviorModel, BehaviorResult, DecisionContext};

/// A [`BehaviorModel`] that always chooses [`Action::Nothing`].
///
/// Useful in tests that exercise scheduling or disease progression without
/// any interactions.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn decide(
        &self,
        _agent: &Agent,
        _ctx:   &DecisionContext<'_>,
        _rng:   &mut SimRng,
    ) -> BehaviorResult<Action> {
        Ok(Action::Nothing)
    }
}
