//! Canonical-location rules.

use serde::Deserialize;

use epi_agent::{Agent, Role, Shift};
use epi_core::{Calendar, LocationId};

// ── Destination ───────────────────────────────────────────────────────────────

/// Why an agent is where it is this hour.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Destination {
    Home,
    Work,
    School,
    Gathering,
}

impl Destination {
    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Home      => "home",
            Destination::Work      => "work",
            Destination::School    => "school",
            Destination::Gathering => "gathering",
        }
    }
}

// ── ScheduleRules ─────────────────────────────────────────────────────────────

/// Calendar windows that drive the hourly reset.
///
/// Both windows are inclusive on both ends, in hours of the 12-hour day.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleRules {
    /// Hours a child spends at school on weekdays.
    pub school_hours: Shift,
    /// Weekend hours during which members attend their community gathering.
    pub gathering_hours: Shift,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            school_hours:    Shift::new(3, 9),
            gathering_hours: Shift::new(1, 4),
        }
    }
}

impl ScheduleRules {
    /// `true` when `agent` should be at its community gathering right now:
    /// a weekend day, inside the gathering window, and a gathering assigned.
    pub fn attends_gathering(&self, agent: &Agent, cal: &Calendar) -> bool {
        cal.is_weekend()
            && self.gathering_hours.contains(cal.hour)
            && agent.role.gathering().is_some()
    }

    /// The kind of place `agent` belongs at this hour.
    pub fn destination(&self, agent: &Agent, cal: &Calendar) -> Destination {
        if cal.is_weekday() {
            return match &agent.role {
                Role::Adult(a) if a.shift.contains(cal.hour) => Destination::Work,
                Role::Child(_) if self.school_hours.contains(cal.hour) => Destination::School,
                _ => Destination::Home,
            };
        }
        if self.attends_gathering(agent, cal) {
            Destination::Gathering
        } else {
            Destination::Home
        }
    }

    /// Resolve [`destination`](Self::destination) to a concrete location.
    pub fn canonical_location(&self, agent: &Agent, cal: &Calendar) -> LocationId {
        let home = agent.home;
        match (self.destination(agent, cal), &agent.role) {
            (Destination::Work, Role::Adult(a))   => a.work,
            (Destination::School, Role::Child(c)) => c.school,
            (Destination::Gathering, role)        => role.gathering().unwrap_or(home),
            _ => home,
        }
    }
}
