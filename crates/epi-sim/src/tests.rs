//! Unit tests for epi-sim.

use epi_agent::{
    Action, AdultInfo, AgentRegistry, ChildInfo, DiseaseStatus, MaskPolicy, PopulationBuilder,
    RetireeInfo, Shift,
};
use epi_behavior::{BehaviorModel, NoopBehavior, TableBehavior};
use epi_core::{AgentId, Calendar, LocationId, SimConfig};
use epi_disease::{DiseaseParameters, InfectivityCurve};
use epi_place::{LocationGraph, LocationGraphBuilder, LocationKind};

use crate::{Interaction, Model, ModelBuilder, ModelObserver, ModelView, NoopObserver, SeedOutcome, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOUSE_A: LocationId = LocationId(0);
const HOUSE_B: LocationId = LocationId(1);
const WORK: LocationId = LocationId(2);
const SCHOOL: LocationId = LocationId(3);
const SHOP: LocationId = LocationId(4);
const GATHERING: LocationId = LocationId(5);

/// Six locations; the shop's public-facing flag is configurable.
fn town(shop_public: bool) -> LocationGraph {
    let mut b = LocationGraphBuilder::new();
    b.add(LocationKind::House);
    b.add(LocationKind::House);
    b.add(LocationKind::Work);
    b.add(LocationKind::School);
    b.add(LocationKind::Business { public_facing: shop_public });
    b.add(LocationKind::CommunityGathering);
    b.build()
}

/// Adult 1 (shift 0..=8, gathering member), Child 2, Retiree 3.
fn family() -> AgentRegistry {
    PopulationBuilder::new()
        .adult(AgentId(1), 35, HOUSE_A, AdultInfo {
            work:      WORK,
            income:    40_000.0,
            shift:     Shift::new(0, 8),
            gathering: Some(GATHERING),
        })
        .child(AgentId(2), 9, HOUSE_A, ChildInfo { school: SCHOOL, gathering: None })
        .retiree(AgentId(3), 70, HOUSE_B, RetireeInfo { income: 20_000.0, gathering: None })
        .build()
        .unwrap()
}

/// Infectivity low enough that nobody dies or transmits in a short test.
fn mild() -> DiseaseParameters {
    DiseaseParameters {
        infectivity: InfectivityCurve { a: 1e-6, ..Default::default() },
        ..Default::default()
    }
}

/// Infectivity high enough that every infected agent dies on its first tick.
fn lethal() -> DiseaseParameters {
    DiseaseParameters {
        infectivity: InfectivityCurve { a: 1e12, ..Default::default() },
        ..Default::default()
    }
}

fn model_with<B: BehaviorModel>(agents: AgentRegistry, places: LocationGraph, behavior: B, disease: DiseaseParameters) -> Model<B> {
    ModelBuilder::new(SimConfig { seed: 7, ..Default::default() }, agents, places, behavior)
        .disease(disease)
        .build()
        .unwrap()
}

/// A larger synthetic town: `households` houses of three, two workplaces,
/// one school, three businesses, one gathering.
fn village(households: u32) -> (AgentRegistry, LocationGraph) {
    let mut b = LocationGraphBuilder::new();
    let houses = b.add_many(LocationKind::House, households as usize);
    let works = b.add_many(LocationKind::Work, 2);
    let school = b.add(LocationKind::School);
    b.add(LocationKind::business(4451));
    b.add(LocationKind::business(3111));
    b.add(LocationKind::business(7225));
    let gathering = b.add(LocationKind::CommunityGathering);

    let mut pop = PopulationBuilder::new();
    for (h, &home) in houses.iter().enumerate() {
        let base = h as u32 * 3;
        pop = pop
            .adult(AgentId(base), 25 + base % 30, home, AdultInfo {
                work:      works[h % 2],
                income:    30_000.0,
                shift:     Shift::new(h as u32 % 3, 8),
                gathering: (h % 2 == 0).then_some(gathering),
            })
            .child(AgentId(base + 1), 5 + base % 10, home, ChildInfo {
                school,
                gathering: Some(gathering),
            })
            .retiree(AgentId(base + 2), 66 + base % 20, home, RetireeInfo {
                income:    15_000.0,
                gathering: None,
            });
    }
    (pop.build().unwrap(), b.build())
}

/// Behavior tables that socialise a lot, so short runs produce contacts.
fn sociable() -> TableBehavior {
    use epi_agent::RoleKind;
    use epi_behavior::{ActionWeights, BehaviorContext, BehaviorParameters};

    let busy = ActionWeights::new([0.3, 0.2, 0.2, 0.2, 0.1]).unwrap();
    let mut params = BehaviorParameters::idle();
    for role in RoleKind::ALL {
        for ctx in BehaviorContext::ALL {
            params.set(role, ctx, busy);
        }
    }
    TableBehavior::new(params)
}

// ── Seeding & vaccination ─────────────────────────────────────────────────────

#[cfg(test)]
mod seeding_tests {
    use super::*;

    #[test]
    fn infect_one_logs_root_case() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        assert_eq!(model.infect(1), SeedOutcome::Infected(1));
        assert_eq!(model.infected_count(), 1);
        assert_eq!(model.transmissions.len(), 1);
        let record = model.transmissions[0];
        assert_eq!(record.infector, None);
        assert_eq!(record.hour, 0);
        assert!(model.agents.get(record.infected).unwrap().is_infected());
    }

    #[test]
    fn infect_more_than_available() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        assert_eq!(model.infect(10), SeedOutcome::Infected(3));
        assert_eq!(model.infect(1), SeedOutcome::NoSusceptibles);
        assert_eq!(model.transmissions.len(), 3);
    }

    #[test]
    fn vaccination_rules() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        assert!(model.vaccinate(AgentId(2)).unwrap());
        assert!(!model.vaccinate(AgentId(2)).unwrap());
        let child = model.agents.get(AgentId(2)).unwrap();
        assert_eq!(child.status, DiseaseStatus::Vaccinated);
        assert!(child.vaccinated);

        model.agents.get_mut(AgentId(1)).unwrap().infect();
        assert!(matches!(model.vaccinate(AgentId(1)), Err(SimError::VaccinateInfected(_))));
        assert!(matches!(model.vaccinate(AgentId(99)), Err(SimError::Agent(_))));
    }

    #[test]
    fn vaccinate_random_skips_infected() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        model.agents.get_mut(AgentId(3)).unwrap().infect();
        assert_eq!(model.vaccinate_random(5).unwrap(), 2);
        assert_eq!(model.agents.get(AgentId(3)).unwrap().status, DiseaseStatus::Infected);
    }
}

// ── Tick orchestration ────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn one_day_advances_illness_by_one_day() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        let SeedOutcome::Infected(1) = model.infect(1) else { panic!("seeding failed") };
        let patient = model.transmissions[0].infected;

        for _ in 0..12 {
            model.step(&mut NoopObserver).unwrap();
        }
        let agent = model.agents.get(patient).unwrap();
        assert_eq!(agent.status, DiseaseStatus::Infected);
        assert!((agent.time_infected - 1.0).abs() < 1e-9, "{}", agent.time_infected);
        assert_eq!(model.calendar.day, 1);
        assert_eq!(model.calendar.hour, 0);
        assert_eq!(model.calendar.step, 12);
    }

    #[test]
    fn weekday_reset_locations() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        model.calendar = Calendar::at(1, 0);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(model.agents.get(AgentId(1)).unwrap().location, WORK);
        assert_eq!(model.agents.get(AgentId(2)).unwrap().location, HOUSE_A);
        assert_eq!(model.agents.get(AgentId(3)).unwrap().location, HOUSE_B);

        model.calendar = Calendar::at(1, 3);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(model.agents.get(AgentId(2)).unwrap().location, SCHOOL);

        model.calendar = Calendar::at(1, 9);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(model.agents.get(AgentId(1)).unwrap().location, HOUSE_A);
        assert_eq!(model.places.occupants(WORK), &[] as &[AgentId]);
    }

    #[test]
    fn weekend_gathering_reset() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        model.calendar = Calendar::at(6, 2);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(model.agents.get(AgentId(1)).unwrap().location, GATHERING);
        assert_eq!(model.agents.get(AgentId(2)).unwrap().location, HOUSE_A);

        model.calendar = Calendar::at(6, 5);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(model.agents.get(AgentId(1)).unwrap().location, HOUSE_A);
    }

    /// One-hot tables: House → Shopping, WorkOrSchool → SocializeLocal,
    /// Gathering → SocializeGlobal.
    fn marker_behavior() -> TableBehavior {
        use epi_agent::RoleKind;
        use epi_behavior::{ActionWeights, BehaviorContext, BehaviorParameters};

        let one_hot = |action: Action| {
            let mut p = [0.0; 5];
            p[action.index()] = 1.0;
            ActionWeights::new(p).unwrap()
        };
        let mut params = BehaviorParameters::idle();
        for role in RoleKind::ALL {
            params.set(role, BehaviorContext::House, one_hot(Action::Shopping));
            params.set(role, BehaviorContext::WorkOrSchool, one_hot(Action::SocializeLocal));
            params.set(role, BehaviorContext::Gathering, one_hot(Action::SocializeGlobal));
        }
        TableBehavior::new(params)
    }

    fn action_of(model: &Model<TableBehavior>, id: u32) -> Action {
        model.agents.get(AgentId(id)).unwrap().next_action
    }

    #[test]
    fn weekday_decision_uses_reset_location() {
        // Closed shop, so shoppers are back home before the next reset.
        let mut model = model_with(family(), town(false), marker_behavior(), mild());

        // Adult starts at home; hour 0 is inside its shift.
        model.calendar = Calendar::at(1, 0);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(action_of(&model, 1), Action::SocializeLocal);
        assert_eq!(action_of(&model, 2), Action::Shopping);

        // Child starts the hour at home and is reset to school.
        model.calendar = Calendar::at(1, 3);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(action_of(&model, 2), Action::SocializeLocal);
        assert_eq!(action_of(&model, 3), Action::Shopping);

        // Adult starts the hour at work and is reset home.
        model.calendar = Calendar::at(1, 9);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(action_of(&model, 1), Action::Shopping);
    }

    #[test]
    fn weekend_gathering_decision() {
        let mut model = model_with(family(), town(false), marker_behavior(), mild());
        for hour in 1..=4 {
            model.calendar = Calendar::at(6, hour);
            model.step(&mut NoopObserver).unwrap();
            assert_eq!(action_of(&model, 1), Action::SocializeGlobal, "hour {hour}");
            assert_eq!(action_of(&model, 2), Action::Shopping, "hour {hour}");
        }
        model.calendar = Calendar::at(6, 5);
        model.step(&mut NoopObserver).unwrap();
        assert_eq!(action_of(&model, 1), Action::Shopping);
    }

    #[test]
    fn occupancy_tracks_registry() {
        let (agents, places) = village(10);
        let mut model = model_with(agents, places, sociable(), mild());
        for _ in 0..30 {
            model.step(&mut NoopObserver).unwrap();
            assert_eq!(model.places.occupancy(), model.agents.len());
            for agent in model.agents.iter() {
                assert!(model.places.occupants(agent.location).contains(&agent.id));
            }
        }
    }

    #[test]
    fn pending_actions_cleared_each_tick() {
        let (agents, places) = village(4);
        let mut model = model_with(agents, places, NoopBehavior, mild());
        for agent in model.agents.iter_mut() {
            agent.next_action = Action::Shopping;
        }
        model.step(&mut NoopObserver).unwrap();
        assert!(model.agents.iter().all(|a| a.next_action == Action::Nothing));
    }

    #[test]
    fn observer_callbacks() {
        #[derive(Default)]
        struct Counter {
            ticks: u64,
            days:  Vec<u64>,
            ends:  u32,
        }
        impl ModelObserver for Counter {
            fn on_tick_end(&mut self, _view: &ModelView<'_>) {
                self.ticks += 1;
            }
            fn on_day_end(&mut self, day: u64, view: &ModelView<'_>) {
                assert_eq!(view.calendar.hour, 11);
                self.days.push(day);
            }
            fn on_run_end(&mut self, _view: &ModelView<'_>) {
                self.ends += 1;
            }
        }

        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        let mut counter = Counter::default();
        model.run_days(2, &mut counter).unwrap();
        assert_eq!(counter.ticks, 24);
        assert_eq!(counter.days, vec![0, 1]);
        assert_eq!(counter.ends, 1);
    }

    #[test]
    fn run_until_stops_when_epidemic_ends() {
        let disease = DiseaseParameters { infectious_period: 0.25, ..mild() };
        let mut model = model_with(family(), town(true), NoopBehavior, disease);
        model.infect(2);
        let ticks = model
            .run_until(crate::no_infected_remaining, 100, &mut NoopObserver)
            .unwrap();
        assert!((3..=4).contains(&ticks), "ran {ticks} ticks");
        assert_eq!(model.agents.count_status(DiseaseStatus::Recovered), 2);

        // Already satisfied: no further ticks.
        assert_eq!(model.run_until(crate::no_infected_remaining, 100, &mut NoopObserver).unwrap(), 0);
    }

    #[test]
    fn mask_adoption_at_end_of_day() {
        let mut agents = family();
        let policy = MaskPolicy { will_mask: [false; 3], thresholds: [0.0, 2.0, 0.0], ..MaskPolicy::never() };
        agents.get_mut(AgentId(1)).unwrap().masks = policy.clone();
        let config = SimConfig { mask_adoption: true, ..Default::default() };
        let mut model = ModelBuilder::new(config, agents, town(true), NoopBehavior)
            .build()
            .unwrap();

        model.run_days(1, &mut NoopObserver).unwrap();
        let masks = &model.agents.get(AgentId(1)).unwrap().masks;
        assert_eq!(masks.will_mask, [true, false, true]);
    }

    #[test]
    fn mask_adoption_off_by_default() {
        let mut agents = family();
        agents.get_mut(AgentId(1)).unwrap().masks.thresholds = [0.0; 3];
        let mut model = model_with(agents, town(true), NoopBehavior, mild());
        model.run_days(1, &mut NoopObserver).unwrap();
        assert_eq!(model.agents.get(AgentId(1)).unwrap().masks.will_mask, [false; 3]);
    }
}

// ── Interactions ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod interaction_tests {
    use super::*;

    /// Two adults standing at the shared workplace.
    fn coworkers() -> Model<NoopBehavior> {
        let mut agents = PopulationBuilder::new()
            .adult(AgentId(1), 30, HOUSE_A, AdultInfo {
                work: WORK, income: 1.0, shift: Shift::new(0, 8), gathering: None,
            })
            .adult(AgentId(2), 31, HOUSE_B, AdultInfo {
                work: WORK, income: 1.0, shift: Shift::new(0, 8), gathering: None,
            })
            .build()
            .unwrap();
        for id in [AgentId(1), AgentId(2)] {
            agents.get_mut(id).unwrap().location = WORK;
        }
        model_with(agents, town(true), NoopBehavior, mild())
    }

    #[test]
    fn unmasked_contact_adds_full_weight() {
        let mut model = coworkers();
        model.interact(AgentId(1), AgentId(2)).unwrap();
        assert_eq!(model.agents.ledger.weight(AgentId(1), AgentId(2)), 1.0);
        assert_eq!(model.agents.ledger.weight(AgentId(2), AgentId(1)), 1.0);
    }

    #[test]
    fn masked_contact_away_from_home_adds_quarter() {
        let mut model = coworkers();
        model.agents.get_mut(AgentId(2)).unwrap().masked = true;
        model.interact(AgentId(1), AgentId(2)).unwrap();
        assert_eq!(model.agents.ledger.weight(AgentId(1), AgentId(2)), 0.25);
        assert_eq!(model.agents.ledger.weight(AgentId(2), AgentId(1)), 0.25);
    }

    #[test]
    fn masked_contact_at_home_adds_full_weight() {
        let mut model = coworkers();
        for id in [AgentId(1), AgentId(2)] {
            model.agents.get_mut(id).unwrap().masked = true;
        }
        // Agent 2 visits agent 1's home; agent 1 is at its own home.
        model.places.move_agent(AgentId(1), WORK, HOUSE_A).unwrap();
        model.agents.get_mut(AgentId(1)).unwrap().location = HOUSE_A;
        model.interact(AgentId(2), AgentId(1)).unwrap();
        assert_eq!(model.agents.ledger.weight(AgentId(1), AgentId(2)), 1.0);
    }

    #[test]
    fn certain_transmission_is_logged() {
        let disease = DiseaseParameters {
            infectivity: InfectivityCurve { a: 100.0, ..Default::default() },
            ..Default::default()
        };
        let mut model = coworkers();
        model.disease = disease;
        {
            let sick = model.agents.get_mut(AgentId(2)).unwrap();
            sick.infect();
            sick.time_infected = 1.0;
            sick.beta = 1.0;
        }
        model.calendar = Calendar::at(2, 5);
        let outcome = model.interact(AgentId(1), AgentId(2)).unwrap();
        assert_eq!(outcome, Interaction::Contact { partner: AgentId(2), transmitted: true });
        let record = *model.transmissions.last().unwrap();
        assert_eq!(record.infected, AgentId(1));
        assert_eq!(record.infector, Some(AgentId(2)));
        assert_eq!(record.hour, 29);
        assert_eq!(model.agents.get(AgentId(1)).unwrap().time_infected, 0.0);
    }

    #[test]
    fn socialize_local_alone_is_noop() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        // Retiree lives alone.
        let outcome = model.execute(AgentId(3), Action::SocializeLocal).unwrap();
        assert_eq!(outcome, Interaction::None);
        assert_eq!(model.agents.ledger.degree(AgentId(3)), 0);
    }

    #[test]
    fn socialize_local_never_picks_self() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        for _ in 0..50 {
            let outcome = model.execute(AgentId(1), Action::SocializeLocal).unwrap();
            assert_eq!(outcome, Interaction::Contact { partner: AgentId(2), transmitted: false });
        }
    }

    #[test]
    fn socialize_global_respects_friend_radius() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        // Child (9) has radius 5: nobody else is within 5 years.
        assert_eq!(model.execute(AgentId(2), Action::SocializeGlobal).unwrap(), Interaction::None);

        // Retiree (70) has radius 20: only the adult (35) is out of range too.
        assert_eq!(model.execute(AgentId(3), Action::SocializeGlobal).unwrap(), Interaction::None);

        model.agents.get_mut(AgentId(3)).unwrap().age = 50;
        let outcome = model.execute(AgentId(3), Action::SocializeGlobal).unwrap();
        assert_eq!(outcome, Interaction::Contact { partner: AgentId(1), transmitted: false });
        assert_eq!(model.agents.get(AgentId(3)).unwrap().location, HOUSE_A);
    }

    #[test]
    fn shopping_at_closed_business_returns() {
        let mut model = model_with(family(), town(false), NoopBehavior, mild());
        model.execute(AgentId(1), Action::Shopping).unwrap();
        assert_eq!(model.agents.get(AgentId(1)).unwrap().location, HOUSE_A);
        assert!(model.places.occupants(SHOP).is_empty());
    }

    #[test]
    fn shopping_at_public_business_stays() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        assert_eq!(model.execute(AgentId(1), Action::Shopping).unwrap(), Interaction::None);
        assert_eq!(model.agents.get(AgentId(1)).unwrap().location, SHOP);

        // A second shopper meets the first.
        let outcome = model.execute(AgentId(3), Action::Shopping).unwrap();
        assert_eq!(outcome, Interaction::Contact { partner: AgentId(1), transmitted: false });
    }

    #[test]
    fn shopping_masks_globally() {
        let mut agents = family();
        agents.get_mut(AgentId(1)).unwrap().masks.will_mask = [true, false, false];
        let mut model = model_with(agents, town(true), NoopBehavior, mild());
        model.execute(AgentId(1), Action::Shopping).unwrap();
        assert!(model.agents.get(AgentId(1)).unwrap().masked);
        model.execute(AgentId(1), Action::SocializeLocal).unwrap();
        assert!(!model.agents.get(AgentId(1)).unwrap().masked);
    }

    #[test]
    fn hang_with_friends_visits_contact() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        model.agents.ledger.add(AgentId(3), AgentId(1), 2.0);
        let outcome = model.execute(AgentId(3), Action::HangWithFriends).unwrap();
        assert_eq!(model.agents.get(AgentId(3)).unwrap().location, HOUSE_A);
        assert!(matches!(outcome, Interaction::Contact { .. }));
    }

    #[test]
    fn hang_with_friends_without_contacts_falls_back() {
        let mut model = model_with(family(), town(true), NoopBehavior, mild());
        let outcome = model.execute(AgentId(1), Action::HangWithFriends).unwrap();
        assert_eq!(outcome, Interaction::Contact { partner: AgentId(2), transmitted: false });
        assert_eq!(model.agents.get(AgentId(1)).unwrap().location, HOUSE_A);
    }
}

// ── Death ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod death_tests {
    use super::*;

    #[test]
    fn dead_agents_leave_registry_and_places() {
        let mut model = model_with(family(), town(true), NoopBehavior, lethal());
        model.agents.ledger.add(AgentId(3), AgentId(1), 4.0);
        model.agents.get_mut(AgentId(3)).unwrap().infect();

        model.step(&mut NoopObserver).unwrap();

        assert!(!model.agents.contains(AgentId(3)));
        assert!(model.places.occupants(HOUSE_B).is_empty());
        assert_eq!(model.places.occupancy(), 2);
        assert_eq!(model.dead.len(), 1);
        let dead = &model.dead[0];
        assert_eq!(dead.id, AgentId(3));
        assert_eq!(dead.home, HOUSE_B);
        assert_eq!(dead.hour, 0);
        assert_eq!(dead.contacts.get(&AgentId(1)), Some(&4.0));
    }

    #[test]
    fn dead_contact_never_chosen() {
        let mut model = model_with(family(), town(true), NoopBehavior, lethal());
        // Agent 1's only ledger contact is the retiree, who dies.
        model.agents.ledger.add(AgentId(1), AgentId(3), 100.0);
        model.agents.get_mut(AgentId(3)).unwrap().infect();
        model.step(&mut NoopObserver).unwrap();

        for _ in 0..200 {
            let outcome = model.execute(AgentId(1), Action::HangWithFriends).unwrap();
            if let Interaction::Contact { partner, .. } = outcome {
                assert_ne!(partner, AgentId(3));
            }
            assert_ne!(model.agents.get(AgentId(1)).unwrap().location, HOUSE_B);
        }
        for _ in 0..200 {
            let outcome = model.execute(AgentId(2), Action::SocializeGlobal).unwrap();
            assert_ne!(outcome, Interaction::Contact { partner: AgentId(3), transmitted: false });
        }
    }

    #[test]
    fn statuses_only_follow_allowed_transitions() {
        let (agents, places) = village(12);
        let disease = DiseaseParameters {
            infectious_period: 2.0,
            infectivity: InfectivityCurve { a: 2.0, ..Default::default() },
            ..Default::default()
        };
        let mut model = model_with(agents, places, sociable(), disease);
        model.vaccinate(AgentId(4)).unwrap();
        model.infect(3);

        let mut before: std::collections::BTreeMap<AgentId, DiseaseStatus> =
            model.agents.iter().map(|a| (a.id, a.status)).collect();
        for _ in 0..72 {
            model.step(&mut NoopObserver).unwrap();
            for (id, old) in &before {
                let Some(agent) = model.agents.get(*id) else {
                    assert_eq!(*old, DiseaseStatus::Infected, "{id} died without being infected");
                    continue;
                };
                let ok = match (old, agent.status) {
                    (a, b) if *a == b => true,
                    (DiseaseStatus::Susceptible, DiseaseStatus::Infected) => true,
                    (DiseaseStatus::Infected, DiseaseStatus::Recovered) => true,
                    (DiseaseStatus::Recovered, DiseaseStatus::Infected) => true,
                    (DiseaseStatus::Vaccinated, DiseaseStatus::Infected) => true,
                    _ => false,
                };
                assert!(ok, "{id}: {old} -> {}", agent.status);
            }
            before = model.agents.iter().map(|a| (a.id, a.status)).collect();
        }
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    fn run(seed: u64) -> Model<TableBehavior> {
        let (agents, places) = village(15);
        let disease = DiseaseParameters {
            infectivity: InfectivityCurve { a: 1.5, ..Default::default() },
            ..Default::default()
        };
        let config = SimConfig { seed, ..Default::default() };
        let mut model = ModelBuilder::new(config, agents, places, sociable())
            .disease(disease)
            .build()
            .unwrap();
        model.infect(3);
        model.run_days(6, &mut NoopObserver).unwrap();
        model
    }

    #[test]
    fn ledger_stays_symmetric() {
        let model = run(11);
        assert!(model.agents.ledger.is_symmetric());
        assert!(model.agents.ledger.agent_count() > 0);
    }

    #[test]
    fn same_seed_same_network() {
        let a = run(5);
        let b = run(5);
        assert_eq!(a.transmissions, b.transmissions);
        assert_eq!(a.dead, b.dead);
        assert!(a.transmissions.len() >= 3);
    }

    #[test]
    fn infected_clock_monotonic_until_recovery() {
        let (agents, places) = village(8);
        let mut model = model_with(agents, places, sociable(), mild());
        model.infect(4);
        let mut clocks: std::collections::BTreeMap<AgentId, f64> = std::collections::BTreeMap::new();
        for _ in 0..48 {
            model.step(&mut NoopObserver).unwrap();
            for agent in model.agents.iter() {
                match agent.status {
                    DiseaseStatus::Infected => {
                        let prev = clocks.insert(agent.id, agent.time_infected);
                        if let Some(prev) = prev {
                            assert!(agent.time_infected >= prev);
                        }
                    }
                    DiseaseStatus::Recovered => assert_eq!(agent.time_infected, 0.0),
                    _ => {}
                }
            }
        }
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn home_must_be_a_house() {
        let agents = PopulationBuilder::new()
            .child(AgentId(1), 8, WORK, ChildInfo { school: SCHOOL, gathering: None })
            .build()
            .unwrap();
        let result = ModelBuilder::new(SimConfig::default(), agents, town(true), NoopBehavior).build();
        assert!(matches!(result, Err(SimError::Assignment { location: WORK, .. })));
    }

    #[test]
    fn school_must_be_a_school() {
        let agents = PopulationBuilder::new()
            .child(AgentId(1), 8, HOUSE_A, ChildInfo { school: SHOP, gathering: None })
            .build()
            .unwrap();
        let result = ModelBuilder::new(SimConfig::default(), agents, town(true), NoopBehavior).build();
        assert!(matches!(result, Err(SimError::Assignment { .. })));
    }

    #[test]
    fn unknown_location_rejected() {
        let agents = PopulationBuilder::new()
            .retiree(AgentId(1), 80, LocationId(42), RetireeInfo { income: 0.0, gathering: None })
            .build()
            .unwrap();
        let result = ModelBuilder::new(SimConfig::default(), agents, town(true), NoopBehavior).build();
        assert!(matches!(result, Err(SimError::Place(_))));
    }

    #[test]
    fn zero_duration_rejected() {
        let config = SimConfig { duration_days: 0, ..Default::default() };
        let result = ModelBuilder::new(config, family(), town(true), NoopBehavior).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn invalid_disease_rejected() {
        let result = ModelBuilder::new(SimConfig::default(), family(), town(true), NoopBehavior)
            .disease(DiseaseParameters { infectious_period: -1.0, ..Default::default() })
            .build();
        assert!(matches!(result, Err(SimError::Disease(_))));
    }

    #[test]
    fn bad_school_window_rejected() {
        let rules = epi_schedule::ScheduleRules { school_hours: Shift::new(3, 12), ..Default::default() };
        let result = ModelBuilder::new(SimConfig::default(), family(), town(true), NoopBehavior)
            .rules(rules)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn agents_placed_at_start() {
        let model = model_with(family(), town(true), NoopBehavior, mild());
        assert_eq!(model.places.occupants(HOUSE_A), &[AgentId(1), AgentId(2)]);
        assert_eq!(model.places.occupants(HOUSE_B), &[AgentId(3)]);
        assert_eq!(model.calendar, Calendar::new());
    }
}
