//! Transmission check for one contact.

use epi_agent::{Agent, DiseaseStatus};
use epi_core::SimRng;

use crate::DiseaseParameters;

/// Divisor applied to the infection probability when the healthy party is
/// masked.
pub const MASK_FACTOR: f64 = 4.0;

/// Probability that `infected` passes the disease to `healthy` on contact,
/// ignoring the reinfection and breakthrough gates.
///
/// `γ(t)·β·4^(-masked)`, where only the healthy party's mask enters the
/// exponent.
pub fn transmission_probability(infected: &Agent, healthy: &Agent, params: &DiseaseParameters) -> f64 {
    let mask_exp = if healthy.masked { 1 } else { 0 };
    let p = params.gamma(infected.time_infected) * infected.beta * MASK_FACTOR.powi(-mask_exp);
    p.clamp(0.0, 1.0)
}

/// Roll whether `healthy` catches the disease from `infected`.
///
/// Recovered agents must first pass a reinfection roll and vaccinated agents
/// a breakthrough roll.  Only Susceptible, Recovered, and Vaccinated agents
/// can be infected; any other status returns `false` without drawing.
pub fn transmission_succeeds(
    infected: &Agent,
    healthy:  &Agent,
    params:   &DiseaseParameters,
    rng:      &mut SimRng,
) -> bool {
    if !infected.is_infected() {
        return false;
    }
    let open = match healthy.status {
        DiseaseStatus::Susceptible => true,
        DiseaseStatus::Recovered   => rng.uniform() < params.reinfection_prob,
        DiseaseStatus::Vaccinated  => rng.uniform() < params.vaccine_breakthrough,
        DiseaseStatus::Infected | DiseaseStatus::Dead => return false,
    };
    open && rng.uniform() < transmission_probability(infected, healthy, params)
}
