//! The live agent registry.

use std::collections::BTreeMap;

use epi_core::AgentId;

use crate::{Agent, AgentError, AgentResult, ContactLedger, DiseaseStatus, RoleKind};

/// Every live agent, keyed and iterated in ascending `AgentId` order, plus
/// the contact ledger that relates them.
///
/// Iteration order is part of the determinism contract: each phase of a tick
/// walks agents in the order returned by [`ids`](Self::ids).
#[derive(Clone, Debug, Default)]
pub struct AgentRegistry {
    agents: BTreeMap<AgentId, Agent>,
    pub ledger: ContactLedger,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new agent.  Fails if the id is already taken.
    pub fn insert(&mut self, agent: Agent) -> AgentResult<()> {
        if self.agents.contains_key(&agent.id) {
            return Err(AgentError::DuplicateId(agent.id));
        }
        self.agents.insert(agent.id, agent);
        Ok(())
    }

    /// Remove an agent from the live set.  Its ledger entries are kept so
    /// that the surviving partners' histories stay intact.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.agents.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    /// Like [`get`](Self::get) but returns an error for unknown ids.
    pub fn require(&self, id: AgentId) -> AgentResult<&Agent> {
        self.agents.get(&id).ok_or(AgentError::NotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Snapshot of live ids in ascending order.
    pub fn ids(&self) -> Vec<AgentId> {
        self.agents.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.values_mut()
    }

    /// Ids of live agents with the given status, ascending.
    pub fn ids_with_status(&self, status: DiseaseStatus) -> Vec<AgentId> {
        self.agents
            .values()
            .filter(|a| a.status == status)
            .map(|a| a.id)
            .collect()
    }

    /// Ids of live agents with the given role, ascending.
    pub fn ids_with_role(&self, kind: RoleKind) -> Vec<AgentId> {
        self.agents
            .values()
            .filter(|a| a.kind() == kind)
            .map(|a| a.id)
            .collect()
    }

    pub fn count_status(&self, status: DiseaseStatus) -> usize {
        self.agents.values().filter(|a| a.status == status).count()
    }
}
