use thiserror::Error;

use epi_core::AgentId;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("duplicate agent id {0}")]
    DuplicateId(AgentId),

    #[error("agent {0} not found")]
    NotFound(AgentId),

    #[error("invalid agent {agent}: {reason}")]
    Invalid {
        agent:  AgentId,
        reason: String,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
