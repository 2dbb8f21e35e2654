//! Plain data row types written by output backends.

use epi_agent::{Agent, DiseaseStatus};
use epi_sim::TransmissionRecord;

/// One edge of the transmission network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmissionRow {
    pub infected: u32,
    /// `None` for seeded cases; written as an empty field.
    pub infector: Option<u32>,
    pub hour:     u64,
}

impl From<&TransmissionRecord> for TransmissionRow {
    fn from(r: &TransmissionRecord) -> Self {
        Self { infected: r.infected.0, infector: r.infector.map(|a| a.0), hour: r.hour }
    }
}

/// Status counts at the end of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyStatusRow {
    pub day:            u64,
    pub susceptible:    usize,
    pub infected:       usize,
    pub recovered:      usize,
    pub vaccinated:     usize,
    /// Cumulative deaths.
    pub dead:           usize,
    /// Transmission records logged during this day (seeded cases included).
    pub new_infections: usize,
}

/// One agent's state at the end of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub day:       u64,
    pub agent_id:  u32,
    pub status:    DiseaseStatus,
    pub masked:    bool,
    /// Workplace or school; `None` for retirees.
    pub daytime:   Option<u32>,
    pub gathering: Option<u32>,
}

impl AgentSnapshotRow {
    pub fn of(day: u64, agent: &Agent) -> Self {
        Self {
            day,
            agent_id:  agent.id.0,
            status:    agent.status,
            masked:    agent.masked,
            daytime:   agent.role.daytime_location().map(|l| l.0),
            gathering: agent.role.gathering().map(|l| l.0),
        }
    }
}
