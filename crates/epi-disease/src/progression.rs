//! Per-tick progression of an infected agent.

use epi_agent::{Agent, DiseaseStatus};
use epi_core::{SimRng, HOURS_PER_DAY};

use crate::DiseaseParameters;

/// One tick, in days.
pub const TICK_DAYS: f64 = 1.0 / HOURS_PER_DAY as f64;

/// Infection fatality ratio at `age`: `10^(-3.27 + 0.0524·age) / 100`.
#[inline]
pub fn ifr(age: u32) -> f64 {
    10f64.powf(-3.27 + 0.0524 * age as f64) / 100.0
}

/// What happened to an agent in the progression phase.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Progression {
    /// Not infected; untouched.
    Unaffected,
    /// Still infected, clock advanced.
    Continuing,
    /// Reached the end of the infectious period.
    Recovered,
    /// Died this tick.  The caller removes the agent from the live registry.
    Died,
}

/// Advance `agent` by one tick of illness.
///
/// Recovery is checked before death, so an agent whose clock reaches the
/// infectious period this tick always recovers.  On death the status is set
/// to [`DiseaseStatus::Dead`] and the clock is left where it stopped.
pub fn progress(agent: &mut Agent, params: &DiseaseParameters, rng: &mut SimRng) -> Progression {
    if agent.status != DiseaseStatus::Infected {
        return Progression::Unaffected;
    }

    agent.time_infected += TICK_DAYS;
    if agent.time_infected >= params.infectious_period {
        agent.status = DiseaseStatus::Recovered;
        agent.time_infected = 0.0;
        return Progression::Recovered;
    }

    let hazard = ifr(agent.age) * params.gamma(agent.time_infected)
        / (params.infectious_period * HOURS_PER_DAY as f64);
    if rng.uniform() < hazard.clamp(0.0, 1.0) {
        agent.status = DiseaseStatus::Dead;
        return Progression::Died;
    }
    Progression::Continuing
}
