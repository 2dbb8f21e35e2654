//! What an agent sees when choosing its action.

use epi_core::Calendar;
use epi_schedule::ScheduleRules;

/// Read-only inputs to one [`BehaviorModel`][crate::BehaviorModel] decision.
///
/// Built by the simulation per agent during the decision phase.  `at_house`
/// is computed after the hourly reset, so it reflects the agent's canonical
/// location for this hour.
pub struct DecisionContext<'a> {
    pub calendar: Calendar,
    pub rules:    &'a ScheduleRules,
    /// `true` if the agent is currently standing at a House-type location.
    pub at_house: bool,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(calendar: Calendar, rules: &'a ScheduleRules, at_house: bool) -> Self {
        Self { calendar, rules, at_house }
    }
}
