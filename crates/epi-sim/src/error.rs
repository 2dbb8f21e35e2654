use thiserror::Error;

use epi_agent::AgentError;
use epi_behavior::BehaviorError;
use epi_core::{AgentId, EpiError, LocationId};
use epi_disease::DiseaseError;
use epi_place::PlaceError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {agent} assigned to {location}: {reason}")]
    Assignment {
        agent:    AgentId,
        location: LocationId,
        reason:   String,
    },

    #[error("cannot vaccinate {0}: currently infected")]
    VaccinateInfected(AgentId),

    #[error(transparent)]
    Core(#[from] EpiError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Disease(#[from] DiseaseError),
}

pub type SimResult<T> = Result<T, SimError>;
