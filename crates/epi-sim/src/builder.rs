//! Fluent builder for constructing a [`Model`].

use log::info;

use epi_agent::{Agent, AgentRegistry, Role, Shift};
use epi_behavior::BehaviorModel;
use epi_core::{Calendar, LocationId, SimConfig, SimRng, HOURS_PER_DAY};
use epi_disease::DiseaseParameters;
use epi_place::{LocationGraph, LocationKind};
use epi_schedule::ScheduleRules;

use crate::{Model, SimError, SimResult};

/// Fluent builder for [`Model<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, duration, mask adoption
/// - [`AgentRegistry`]: from [`epi_agent::PopulationBuilder`]
/// - [`LocationGraph`]: from [`epi_place::LocationGraphBuilder`] or the CSV loader
/// - `B: BehaviorModel`: the decision logic
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                        |
/// |-----------------|--------------------------------|
/// | `.rules(r)`     | `ScheduleRules::default()`     |
/// | `.disease(d)`   | `DiseaseParameters::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let agents = PopulationBuilder::new().adult(..).child(..).build()?;
/// let mut model = ModelBuilder::new(config, agents, places, TableBehavior::default())
///     .disease(disease)
///     .build()?;
/// model.run(&mut NoopObserver)?;
/// ```
pub struct ModelBuilder<B: BehaviorModel> {
    config:   SimConfig,
    agents:   AgentRegistry,
    places:   LocationGraph,
    rules:    Option<ScheduleRules>,
    disease:  Option<DiseaseParameters>,
    behavior: B,
}

impl<B: BehaviorModel> ModelBuilder<B> {
    pub fn new(config: SimConfig, agents: AgentRegistry, places: LocationGraph, behavior: B) -> Self {
        Self { config, agents, places, rules: None, disease: None, behavior }
    }

    pub fn rules(mut self, rules: ScheduleRules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn disease(mut self, disease: DiseaseParameters) -> Self {
        self.disease = Some(disease);
        self
    }

    /// Validate every input, place each agent at its current location in
    /// the occupancy index, and return a model positioned at day 0 hour 0.
    pub fn build(self) -> SimResult<Model<B>> {
        let rules = self.rules.unwrap_or_default();
        let disease = self.disease.unwrap_or_default();
        self.config.validate()?;
        disease.validate()?;
        check_window("school_hours", rules.school_hours)?;
        check_window("gathering_hours", rules.gathering_hours)?;

        let mut places = self.places;
        for agent in self.agents.iter() {
            check_assignments(agent, &places)?;
            places.place(agent.id, agent.location)?;
        }

        info!(
            "model built: {} agents, {} locations ({} businesses), seed {}",
            self.agents.len(),
            places.len(),
            places.businesses().len(),
            self.config.seed,
        );

        Ok(Model {
            calendar:      Calendar::new(),
            rng:           SimRng::new(self.config.seed),
            config:        self.config,
            agents:        self.agents,
            places,
            rules,
            behavior:      self.behavior,
            disease,
            transmissions: Vec::new(),
            dead:          Vec::new(),
        })
    }
}

fn check_window(name: &str, window: Shift) -> SimResult<()> {
    if window.start > window.end || window.end >= HOURS_PER_DAY {
        return Err(SimError::Config(format!(
            "{name} {}..={} must satisfy start <= end < {HOURS_PER_DAY}",
            window.start, window.end,
        )));
    }
    Ok(())
}

/// Every location an agent references must exist and have the right kind.
fn check_assignments(agent: &Agent, places: &LocationGraph) -> SimResult<()> {
    let expect = |location: LocationId, ok: fn(LocationKind) -> bool, what: &str| -> SimResult<()> {
        let kind = places.require(location)?;
        if ok(kind) {
            Ok(())
        } else {
            Err(SimError::Assignment {
                agent: agent.id,
                location,
                reason: format!("{what} cannot be a {kind}"),
            })
        }
    };

    expect(agent.home, LocationKind::is_house, "home")?;
    places.require(agent.location)?;
    match &agent.role {
        Role::Adult(a) => expect(a.work, |k| !k.is_house() && k != LocationKind::CommunityGathering, "workplace")?,
        Role::Child(c) => expect(c.school, |k| k == LocationKind::School, "school")?,
        Role::Retiree(_) => {}
    }
    if let Some(gathering) = agent.role.gathering() {
        expect(gathering, |k| k == LocationKind::CommunityGathering, "community gathering")?;
    }
    Ok(())
}
