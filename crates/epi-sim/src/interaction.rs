//! Action execution: partner selection, movement, contact accounting, and
//! transmission.

use log::trace;

use epi_agent::{Action, AgentError, MaskContext};
use epi_behavior::{spin_weighted, BehaviorModel};
use epi_core::{AgentId, LocationId};
use epi_disease::transmission_succeeds;

use crate::{Model, SimResult, TransmissionRecord};

/// Ledger weight for a contact at home or between two unmasked agents.
pub const FULL_CONTACT: f64 = 1.0;

/// Ledger weight for a contact away from home with at least one mask.
pub const MASKED_CONTACT: f64 = 0.25;

/// What an executed action amounted to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Interaction {
    /// No partner was available (or the action was `Nothing`).
    None,
    /// The agent met `partner`.  `transmitted` is set when the contact
    /// produced a new infection in either direction.
    Contact { partner: AgentId, transmitted: bool },
}

impl<B: BehaviorModel> Model<B> {
    /// Execute `action` for agent `id`.
    pub fn execute(&mut self, id: AgentId, action: Action) -> SimResult<Interaction> {
        match action {
            Action::SocializeLocal  => self.socialize_local(id),
            Action::SocializeGlobal => self.socialize_global(id),
            Action::HangWithFriends => self.hang_with_friends(id),
            Action::Shopping        => self.shopping(id),
            Action::Nothing         => Ok(Interaction::None),
        }
    }

    /// Meet a random agent at the current location.
    fn socialize_local(&mut self, id: AgentId) -> SimResult<Interaction> {
        self.put_on_mask(id, MaskContext::Social)?;
        self.meet_someone_here(id)
    }

    /// Travel to a random agent of similar age and meet them.
    fn socialize_global(&mut self, id: AgentId) -> SimResult<Interaction> {
        self.put_on_mask(id, MaskContext::Global)?;
        let me = self.agents.require(id)?;
        let (age, radius) = (me.age, me.kind().friend_radius());

        let candidates: Vec<(AgentId, LocationId)> = self
            .agents
            .iter()
            .filter(|other| other.id != id && other.age.abs_diff(age) < radius)
            .map(|other| (other.id, other.location))
            .collect();
        let Some(&(friend, location)) = self.rng.choose(&candidates) else {
            return Ok(Interaction::None);
        };

        self.move_to(id, location)?;
        self.interact(id, friend)
    }

    /// Visit a past contact, chosen in proportion to accumulated ledger
    /// weight, and meet someone there.  Without live contacts this is
    /// [`socialize_local`](Self::socialize_local).
    fn hang_with_friends(&mut self, id: AgentId) -> SimResult<Interaction> {
        self.put_on_mask(id, MaskContext::Local)?;

        let (friends, weights): (Vec<AgentId>, Vec<f64>) = self
            .agents
            .ledger
            .contacts(id)
            .map(|(other, w)| (other, if self.agents.contains(other) { w } else { 0.0 }))
            .unzip();
        let Some(pick) = spin_weighted(&weights, &mut self.rng) else {
            return self.socialize_local(id);
        };

        let friend = friends[pick];
        let location = self.agents.require(friend)?.location;
        self.move_to(id, location)?;
        self.meet_someone_here(id)
    }

    /// Visit a random business and meet someone there.  Agents return to
    /// where they were unless the business is public-facing.
    fn shopping(&mut self, id: AgentId) -> SimResult<Interaction> {
        self.put_on_mask(id, MaskContext::Global)?;
        let Some(&shop) = self.rng.choose(self.places.businesses()) else {
            return Ok(Interaction::None);
        };

        let prior = self.agents.require(id)?.location;
        self.move_to(id, shop)?;
        let outcome = self.meet_someone_here(id)?;
        if !self.places.is_public_facing(shop) {
            self.move_to(id, prior)?;
        }
        Ok(outcome)
    }

    // ── Shared steps ──────────────────────────────────────────────────────

    fn put_on_mask(&mut self, id: AgentId, ctx: MaskContext) -> SimResult<()> {
        self.agents.get_mut(id).ok_or(AgentError::NotFound(id))?.mask_for(ctx);
        Ok(())
    }

    fn move_to(&mut self, id: AgentId, to: LocationId) -> SimResult<()> {
        let agent = self.agents.get_mut(id).ok_or(AgentError::NotFound(id))?;
        self.places.move_agent(id, agent.location, to)?;
        agent.location = to;
        Ok(())
    }

    /// Interact with a uniformly random other occupant of the agent's
    /// current location.
    fn meet_someone_here(&mut self, id: AgentId) -> SimResult<Interaction> {
        let here = self.agents.require(id)?.location;
        let others: Vec<AgentId> = self
            .places
            .occupants(here)
            .iter()
            .copied()
            .filter(|&other| other != id)
            .collect();
        match self.rng.choose(&others) {
            Some(&partner) => self.interact(id, partner),
            None => Ok(Interaction::None),
        }
    }

    /// Record a contact between `a` and `c` and run the transmission check.
    pub fn interact(&mut self, a: AgentId, c: AgentId) -> SimResult<Interaction> {
        let first = self.agents.require(a)?;
        let second = self.agents.require(c)?;

        let weight = if first.is_home() || second.is_home() || !(first.masked || second.masked) {
            FULL_CONTACT
        } else {
            MASKED_CONTACT
        };
        let pair = match (first.is_infected(), second.is_infected()) {
            (true, false) => Some((a, c)),
            (false, true) => Some((c, a)),
            _ => None,
        };
        self.agents.ledger.add(a, c, weight);

        let Some((source, target)) = pair else {
            return Ok(Interaction::Contact { partner: c, transmitted: false });
        };
        let infected = self.agents.require(source)?;
        let healthy = self.agents.require(target)?;
        if !transmission_succeeds(infected, healthy, &self.disease, &mut self.rng) {
            return Ok(Interaction::Contact { partner: c, transmitted: false });
        }

        self.agents.get_mut(target).ok_or(AgentError::NotFound(target))?.infect();
        let hour = self.calendar.absolute_hour();
        self.transmissions.push(TransmissionRecord { infected: target, infector: Some(source), hour });
        trace!("{source} infected {target} at {}", self.calendar);
        Ok(Interaction::Contact { partner: c, transmitted: true })
    }
}
