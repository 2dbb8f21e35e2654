//! Fluent builder for an [`AgentRegistry`].
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::{AdultInfo, PopulationBuilder, Role, Shift};
//! use epi_core::{AgentId, LocationId};
//!
//! let registry = PopulationBuilder::new()
//!     .default_beta(0.3)
//!     .adult(AgentId(1), 40, LocationId(0), AdultInfo {
//!         work:      LocationId(1),
//!         income:    52_000.0,
//!         shift:     Shift::new(0, 8),
//!         gathering: None,
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 1);
//! assert_eq!(registry.get(AgentId(1)).unwrap().beta, 0.3);
//! ```

use epi_core::{AgentId, LocationId};

use crate::{AdultInfo, Agent, AgentError, AgentRegistry, AgentResult, ChildInfo, RetireeInfo, Role};

/// Collects agents and validates them into an [`AgentRegistry`].
///
/// Record-level problems (duplicate ids, β outside `[0, 1]`, a shift that
/// runs past the end of the day) are reported by [`build`](Self::build).
#[derive(Default)]
pub struct PopulationBuilder {
    agents:       Vec<Agent>,
    default_beta: Option<f64>,
}

impl PopulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// β applied to every agent added through the role shorthands below.
    pub fn default_beta(mut self, beta: f64) -> Self {
        self.default_beta = Some(beta);
        self
    }

    /// Add a fully configured agent as-is.
    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn adult(self, id: AgentId, age: u32, home: LocationId, info: AdultInfo) -> Self {
        self.role(id, age, home, Role::Adult(info))
    }

    pub fn child(self, id: AgentId, age: u32, home: LocationId, info: ChildInfo) -> Self {
        self.role(id, age, home, Role::Child(info))
    }

    pub fn retiree(self, id: AgentId, age: u32, home: LocationId, info: RetireeInfo) -> Self {
        self.role(id, age, home, Role::Retiree(info))
    }

    fn role(mut self, id: AgentId, age: u32, home: LocationId, role: Role) -> Self {
        let mut agent = Agent::new(id, age, home, role);
        if let Some(beta) = self.default_beta {
            agent.beta = beta;
        }
        self.agents.push(agent);
        self
    }

    /// Validate every record and assemble the registry.
    pub fn build(self) -> AgentResult<AgentRegistry> {
        let mut registry = AgentRegistry::new();
        for agent in self.agents {
            validate(&agent)?;
            registry.insert(agent)?;
        }
        Ok(registry)
    }
}

fn validate(agent: &Agent) -> AgentResult<()> {
    let invalid = |reason: String| AgentError::Invalid { agent: agent.id, reason };

    if !(0.0..=1.0).contains(&agent.beta) {
        return Err(invalid(format!("beta {} outside [0, 1]", agent.beta)));
    }
    if let Role::Adult(info) = &agent.role {
        if info.shift.start > info.shift.end || info.shift.end >= epi_core::HOURS_PER_DAY {
            return Err(invalid(format!(
                "shift {}..={} does not fit a {}-hour day",
                info.shift.start,
                info.shift.end,
                epi_core::HOURS_PER_DAY,
            )));
        }
    }
    Ok(())
}
