//! The shared agent base record.

use std::collections::BTreeMap;

use epi_core::{AgentId, LocationId};

use crate::{Action, DiseaseStatus, MaskContext, MaskPolicy, Role, RoleKind};

/// Default infectivity coefficient β for agents built without an explicit one.
pub const DEFAULT_BETA: f64 = 0.5;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    #[default]
    Female,
    Male,
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One simulated person.
///
/// Fields shared by every role live here; role-specific assignments live in
/// [`Role`].  The contact ledger is not stored on the record: it is a
/// pair relation owned by [`ContactLedger`](crate::ContactLedger) so that
/// both directions of a pair are always written together.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:   AgentId,
    pub age:  u32,
    pub sex:  Sex,
    pub home: LocationId,

    /// Node the agent currently occupies.  Kept in sync with the location
    /// graph's occupancy index by the simulation.
    pub location: LocationId,

    pub status: DiseaseStatus,
    /// Days since infection, advanced by 1/12 per tick while infected.
    pub time_infected: f64,
    /// Infectivity coefficient.
    pub beta: f64,

    pub masks:      MaskPolicy,
    /// Whether the agent is wearing a mask for its current action.
    pub masked:     bool,
    pub vaccinated: bool,

    /// Action chosen for the current hour; reset at the top of every tick.
    pub next_action: Action,

    pub role: Role,
}

impl Agent {
    /// A susceptible, unmasked agent standing at `home`.
    pub fn new(id: AgentId, age: u32, home: LocationId, role: Role) -> Self {
        Self {
            id,
            age,
            sex: Sex::default(),
            home,
            location: home,
            status: DiseaseStatus::Susceptible,
            time_infected: 0.0,
            beta: DEFAULT_BETA,
            masks: MaskPolicy::never(),
            masked: false,
            vaccinated: false,
            next_action: Action::Nothing,
            role,
        }
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_masks(mut self, masks: MaskPolicy) -> Self {
        self.masks = masks;
        self
    }

    pub fn with_status(mut self, status: DiseaseStatus) -> Self {
        self.status = status;
        self.vaccinated = status == DiseaseStatus::Vaccinated;
        self
    }

    #[inline]
    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.status.is_infected()
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        self.location == self.home
    }

    /// Put the mask on or off according to the policy for `ctx`.
    #[inline]
    pub fn mask_for(&mut self, ctx: MaskContext) {
        self.masked = self.masks.wants(ctx);
    }

    /// Mark as newly infected, restarting the infection clock.
    pub fn infect(&mut self) {
        self.status = DiseaseStatus::Infected;
        self.time_infected = 0.0;
    }
}

// ── DeadAgent ─────────────────────────────────────────────────────────────────

/// Record kept for an agent removed from the live registry by death.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadAgent {
    pub id:       AgentId,
    pub age:      u32,
    pub home:     LocationId,
    /// Absolute hour (`day * 12 + hour`) of death.
    pub hour:     u64,
    /// Contact history at the time of death.
    pub contacts: BTreeMap<AgentId, f64>,
}
