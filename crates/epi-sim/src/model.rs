//! The `Model` context object and its tick loop.

use log::{debug, info};

use epi_agent::{Action, AgentError, AgentRegistry, DeadAgent, DiseaseStatus};
use epi_behavior::{BehaviorModel, DecisionContext};
use epi_core::{AgentId, Calendar, SimConfig, SimRng};
use epi_disease::{progress, DiseaseParameters, Progression};
use epi_place::LocationGraph;
use epi_schedule::ScheduleRules;

use crate::{ModelObserver, ModelView, SimError, SimResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// One edge of the transmission network.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TransmissionRecord {
    pub infected: AgentId,
    /// `None` for externally seeded cases.
    pub infector: Option<AgentId>,
    /// Absolute hour (`day * 12 + hour`) of infection.
    pub hour:     u64,
}

/// Result of [`Model::infect`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SeedOutcome {
    /// This many susceptible agents were infected (fewer than requested when
    /// the susceptible pool ran short).
    Infected(usize),
    /// Nobody was susceptible; nothing changed.
    NoSusceptibles,
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// All state of one simulation run.
///
/// `Model<B>` is passed explicitly everywhere; there is no ambient global
/// state.  Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model<B: BehaviorModel> {
    pub config: SimConfig,

    /// Current (day, hour) and the global step counter.
    pub calendar: Calendar,

    /// The run's single random stream, seeded from `config.seed`.
    pub rng: SimRng,

    /// Live agents plus the contact ledger.
    pub agents: AgentRegistry,

    /// Typed locations and who is at each of them.
    pub places: LocationGraph,

    pub rules: ScheduleRules,

    /// Called once per agent per tick in the decision phase.
    pub behavior: B,

    pub disease: DiseaseParameters,

    /// Transmission network in the order infections happened.
    pub transmissions: Vec<TransmissionRecord>,

    /// Agents removed by death, in order of death.
    pub dead: Vec<DeadAgent>,
}

impl<B: BehaviorModel> Model<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Read-only view for observers.
    pub fn view(&self) -> ModelView<'_> {
        ModelView {
            calendar:      self.calendar,
            agents:        &self.agents,
            places:        &self.places,
            transmissions: &self.transmissions,
            dead:          &self.dead,
        }
    }

    /// Number of live agents currently infected.
    pub fn infected_count(&self) -> usize {
        self.agents.count_status(DiseaseStatus::Infected)
    }

    /// Run exactly one hour.
    pub fn step<O: ModelObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.progression_phase()?;
        self.reset_phase()?;
        self.decision_phase()?;
        self.interaction_phase()?;

        observer.on_tick_end(&self.view());
        if self.calendar.is_last_hour() {
            self.end_of_day(observer);
        }
        self.calendar.advance();
        Ok(())
    }

    /// Run `config.duration_days` days.
    pub fn run<O: ModelObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.run_days(self.config.duration_days, observer)
    }

    /// Run `days` whole days from the current position.
    pub fn run_days<O: ModelObserver>(&mut self, days: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..days * epi_core::HOURS_PER_DAY as u64 {
            self.step(observer)?;
        }
        observer.on_run_end(&self.view());
        Ok(())
    }

    /// Step until `stop(self)` returns `true` or `max_ticks` ticks have run.
    ///
    /// The predicate is checked before every tick, so a model that already
    /// satisfies it does not step at all.  Returns the number of ticks run.
    pub fn run_until<F, O>(&mut self, mut stop: F, max_ticks: u64, observer: &mut O) -> SimResult<u64>
    where
        F: FnMut(&Self) -> bool,
        O: ModelObserver,
    {
        let mut ticks = 0;
        while ticks < max_ticks && !stop(&*self) {
            self.step(observer)?;
            ticks += 1;
        }
        observer.on_run_end(&self.view());
        Ok(ticks)
    }

    /// Promote up to `n` uniformly chosen susceptible agents to Infected,
    /// logging each as a root case.
    pub fn infect(&mut self, n: usize) -> SeedOutcome {
        let pool = self.agents.ids_with_status(DiseaseStatus::Susceptible);
        if pool.is_empty() {
            return SeedOutcome::NoSusceptibles;
        }
        let hour = self.calendar.absolute_hour();
        let chosen = self.rng.choose_multiple(&pool, n);
        for &id in &chosen {
            if let Some(agent) = self.agents.get_mut(id) {
                agent.infect();
                self.transmissions.push(TransmissionRecord { infected: id, infector: None, hour });
            }
        }
        debug!("seeded {} infection(s) at {}", chosen.len(), self.calendar);
        SeedOutcome::Infected(chosen.len())
    }

    /// Vaccinate one agent.  Returns `Ok(false)` if it already was.
    ///
    /// Infected agents cannot be vaccinated.
    pub fn vaccinate(&mut self, id: AgentId) -> SimResult<bool> {
        let agent = self.agents.get_mut(id).ok_or(AgentError::NotFound(id))?;
        match agent.status {
            DiseaseStatus::Infected => Err(SimError::VaccinateInfected(id)),
            DiseaseStatus::Vaccinated => Ok(false),
            _ => {
                agent.status = DiseaseStatus::Vaccinated;
                agent.vaccinated = true;
                Ok(true)
            }
        }
    }

    /// Vaccinate up to `n` uniformly chosen Susceptible or Recovered agents.
    /// Returns how many were vaccinated.
    pub fn vaccinate_random(&mut self, n: usize) -> SimResult<usize> {
        let pool: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|a| matches!(a.status, DiseaseStatus::Susceptible | DiseaseStatus::Recovered))
            .map(|a| a.id)
            .collect();
        let chosen = self.rng.choose_multiple(&pool, n);
        for &id in &chosen {
            self.vaccinate(id)?;
        }
        Ok(chosen.len())
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// ① Clear pending actions and advance illness.  Deaths are collected
    /// during the pass and applied after it.
    fn progression_phase(&mut self) -> SimResult<()> {
        let mut died = Vec::new();
        for agent in self.agents.iter_mut() {
            agent.next_action = Action::Nothing;
            match progress(agent, &self.disease, &mut self.rng) {
                Progression::Died => died.push(agent.id),
                Progression::Recovered => debug!("{} recovered at {}", agent.id, self.calendar),
                Progression::Continuing | Progression::Unaffected => {}
            }
        }
        for id in died {
            self.bury(id)?;
        }
        Ok(())
    }

    /// ② Move every agent to its canonical location for this hour.
    fn reset_phase(&mut self) -> SimResult<()> {
        for agent in self.agents.iter_mut() {
            let target = self.rules.canonical_location(agent, &self.calendar);
            self.places.move_agent(agent.id, agent.location, target)?;
            agent.location = target;
        }
        Ok(())
    }

    /// ③ Choose every agent's action.
    fn decision_phase(&mut self) -> SimResult<()> {
        for agent in self.agents.iter_mut() {
            let at_house = self.places.is_house(agent.location);
            let ctx = DecisionContext::new(self.calendar, &self.rules, at_house);
            agent.next_action = self.behavior.decide(agent, &ctx, &mut self.rng)?;
        }
        Ok(())
    }

    /// ④ Execute pending actions in ascending id order.
    fn interaction_phase(&mut self) -> SimResult<()> {
        for id in self.agents.ids() {
            let Some(action) = self.agents.get(id).map(|a| a.next_action) else {
                continue;
            };
            self.execute(id, action)?;
        }
        Ok(())
    }

    fn end_of_day<O: ModelObserver>(&mut self, observer: &mut O) {
        let day = self.calendar.day;
        observer.on_day_end(day, &self.view());

        let live = self.agents.len();
        let infected = self.infected_count();
        if self.config.mask_adoption && live > 0 {
            let prevalence = infected as f64 / live as f64;
            for agent in self.agents.iter_mut() {
                agent.masks.adopt(prevalence);
            }
        }
        info!(
            "day {day} done: {live} alive, {infected} infected, {} dead, {} infections total",
            self.dead.len(),
            self.transmissions.len(),
        );
    }

    /// Remove a dead agent from the live registry and the occupancy index,
    /// keeping its contact history in the dead ledger.
    fn bury(&mut self, id: AgentId) -> SimResult<()> {
        let agent = self.agents.remove(id).ok_or(AgentError::NotFound(id))?;
        self.places.remove(id, agent.location);
        let hour = self.calendar.absolute_hour();
        debug!("{id} died at {} (age {})", self.calendar, agent.age);
        self.dead.push(DeadAgent {
            id,
            age:      agent.age,
            home:     agent.home,
            hour,
            contacts: self.agents.ledger.history(id),
        });
        Ok(())
    }
}

/// Stopping predicate for [`Model::run_until`]: the epidemic is over.
pub fn no_infected_remaining<B: BehaviorModel>(model: &Model<B>) -> bool {
    model.infected_count() == 0
}
