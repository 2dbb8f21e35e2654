//! The `BehaviorModel` trait: the extension point for decision logic.

use epi_agent::Agent;
use epi_core::SimRng;

use crate::{Action, BehaviorResult, DecisionContext};

/// Pluggable hourly decision.
///
/// Implementations receive the agent (read-only), the decision context, and
/// the run's RNG stream.  They must draw randomness only from `rng` so that
/// runs stay reproducible.
///
/// # Example
///
/// ```rust
/// use epi_agent::{Action, Agent};
/// use epi_behavior::{BehaviorModel, BehaviorResult, DecisionContext};
/// use epi_core::SimRng;
///
/// /// Shops every weekday hour spent at home.
/// struct Shopaholic;
///
/// impl BehaviorModel for Shopaholic {
///     fn decide(&self, _agent: &Agent, ctx: &DecisionContext<'_>, _rng: &mut SimRng) -> BehaviorResult<Action> {
///         Ok(if ctx.calendar.is_weekday() && ctx.at_house { Action::Shopping } else { Action::Nothing })
///     }
/// }
/// ```
pub trait BehaviorModel {
    /// Choose this hour's action for `agent`.
    fn decide(
        &self,
        agent: &Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut SimRng,
    ) -> BehaviorResult<Action>;
}
