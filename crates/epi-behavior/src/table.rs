//! Table-driven behavior: pick the role's table for the current context and
//! spin it.

use epi_agent::Agent;
use epi_core::SimRng;

use crate::sampler::spin_first_match;
use crate::{Action, BehaviorContext, BehaviorModel, BehaviorParameters, BehaviorResult, DecisionContext};

/// The standard [`BehaviorModel`].
///
/// | Calendar | Situation                              | Table          |
/// |----------|----------------------------------------|----------------|
/// | weekday  | at a house                             | `House`        |
/// | weekday  | anywhere else                          | `WorkOrSchool` |
/// | weekend  | gathering hour, gathering assigned     | `Gathering`    |
/// | weekend  | otherwise                              | `House`        |
#[derive(Clone, Debug, Default)]
pub struct TableBehavior {
    pub params: BehaviorParameters,
}

impl TableBehavior {
    pub fn new(params: BehaviorParameters) -> Self {
        Self { params }
    }

    /// The table that applies to `agent` in `ctx`.
    pub fn context_for(&self, agent: &Agent, ctx: &DecisionContext<'_>) -> BehaviorContext {
        let cal = &ctx.calendar;
        if cal.is_weekday() {
            if ctx.at_house { BehaviorContext::House } else { BehaviorContext::WorkOrSchool }
        } else if ctx.rules.attends_gathering(agent, cal) {
            BehaviorContext::Gathering
        } else {
            BehaviorContext::House
        }
    }
}

impl BehaviorModel for TableBehavior {
    fn decide(
        &self,
        agent: &Agent,
        ctx:   &DecisionContext<'_>,
        rng:   &mut SimRng,
    ) -> BehaviorResult<Action> {
        let role = agent.kind();
        let cal = &ctx.calendar;
        let weekday = cal.is_weekday();

        let conditions = [
            weekday && ctx.at_house,
            weekday && !ctx.at_house,
            !weekday && ctx.rules.attends_gathering(agent, cal),
            !weekday,
        ];
        let tables = [
            self.params.get(role, BehaviorContext::House),
            self.params.get(role, BehaviorContext::WorkOrSchool),
            self.params.get(role, BehaviorContext::Gathering),
            self.params.get(role, BehaviorContext::House),
        ];
        spin_first_match(&conditions, &tables, rng)
    }
}
