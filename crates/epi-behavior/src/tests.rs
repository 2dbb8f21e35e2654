//! Unit tests for epi-behavior.

use epi_agent::{AdultInfo, Agent, ChildInfo, Role, Shift};
use epi_core::{AgentId, Calendar, LocationId, SimRng};
use epi_schedule::ScheduleRules;

use crate::{
    Action, ActionWeights, BehaviorContext, BehaviorModel, BehaviorParameters, DecisionContext,
    NoopBehavior, TableBehavior,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn adult(gathering: Option<LocationId>) -> Agent {
    Agent::new(AgentId(1), 40, LocationId(0), Role::Adult(AdultInfo {
        work:   LocationId(1),
        income: 30_000.0,
        shift:  Shift::new(0, 8),
        gathering,
    }))
}

fn child() -> Agent {
    Agent::new(AgentId(2), 8, LocationId(0), Role::Child(ChildInfo {
        school:    LocationId(2),
        gathering: None,
    }))
}

/// Tables where every context forces a different, recognisable action.
fn marker_params() -> BehaviorParameters {
    let one_hot = |i: usize| {
        let mut p = [0.0; 5];
        p[i] = 1.0;
        ActionWeights::new(p).unwrap()
    };
    let mut params = BehaviorParameters::idle();
    for role in epi_agent::RoleKind::ALL {
        params.set(role, BehaviorContext::House, one_hot(Action::Shopping.index()));
        params.set(role, BehaviorContext::WorkOrSchool, one_hot(Action::SocializeLocal.index()));
        params.set(role, BehaviorContext::Gathering, one_hot(Action::SocializeGlobal.index()));
    }
    params
}

// ── Sampler ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampler_tests {
    use super::*;
    use crate::{spin, spin_first_match, spin_weighted, BehaviorError};

    #[test]
    fn degenerate_distribution_always_nothing() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let idx = spin(&[0.0, 0.0, 0.0, 0.0, 1.0], &mut rng).unwrap();
            assert_eq!(Action::from_index(idx), Action::Nothing);
        }
    }

    #[test]
    fn rejects_vectors_not_summing_to_one() {
        let mut rng = SimRng::new(0);
        assert!(matches!(
            spin(&[0.5, 0.2, 0.0, 0.0, 0.0], &mut rng),
            Err(BehaviorError::InvalidDistribution { .. })
        ));
        assert!(spin(&[1.5, -0.5, 0.0, 0.0, 0.0], &mut rng).is_err());
        assert!(ActionWeights::new([0.2; 5]).is_ok());
        assert!(ActionWeights::new([0.3; 5]).is_err());
    }

    #[test]
    fn spin_frequencies_track_probabilities() {
        let mut rng = SimRng::new(11);
        let probs = [0.1, 0.2, 0.3, 0.4, 0.0];
        let mut counts = [0usize; 5];
        let n = 20_000;
        for _ in 0..n {
            counts[spin(&probs, &mut rng).unwrap()] += 1;
        }
        assert_eq!(counts[4], 0, "zero-probability slot drawn");
        for i in 0..4 {
            let freq = counts[i] as f64 / n as f64;
            assert!((freq - probs[i]).abs() < 0.02, "slot {i}: {freq}");
        }
    }

    #[test]
    fn weighted_never_picks_zero_weight() {
        let mut rng = SimRng::new(3);
        let weights = [0.0, 2.0, 0.0, 0.5, 0.0];
        for _ in 0..2000 {
            let i = spin_weighted(&weights, &mut rng).unwrap();
            assert!(i == 1 || i == 3, "picked {i}");
        }
    }

    #[test]
    fn weighted_all_zero_is_none() {
        let mut rng = SimRng::new(3);
        assert_eq!(spin_weighted(&[0.0, 0.0], &mut rng), None);
        assert_eq!(spin_weighted(&[], &mut rng), None);
    }

    #[test]
    fn first_match_length_mismatch() {
        let mut rng = SimRng::new(0);
        let idle = ActionWeights::IDLE;
        assert!(matches!(
            spin_first_match(&[true, false], &[&idle], &mut rng),
            Err(BehaviorError::LengthMismatch { conditions: 2, distributions: 1 })
        ));
    }

    #[test]
    fn first_match_without_match_is_nothing() {
        let mut rng = SimRng::new(0);
        let shop = ActionWeights::new([0.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(spin_first_match(&[false], &[&shop], &mut rng).unwrap(), Action::Nothing);
        assert_eq!(spin_first_match(&[true], &[&shop], &mut rng).unwrap(), Action::Shopping);
    }
}

// ── Parameters / loader ───────────────────────────────────────────────────────

#[cfg(test)]
mod params_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{load_behavior_reader, BehaviorError};
    use epi_agent::RoleKind;

    const HEADER: &str = "role,context,socialize_local,socialize_global,hang_with_friends,shopping,nothing\n";

    fn full_csv() -> String {
        let mut csv = HEADER.to_owned();
        for role in ["adult", "child", "retiree"] {
            for ctx in ["house", "work_or_school", "gathering"] {
                csv.push_str(&format!("{role},{ctx},0.1,0.1,0.1,0.1,0.6\n"));
            }
        }
        csv
    }

    #[test]
    fn defaults_are_valid_distributions() {
        let params = BehaviorParameters::default();
        for role in RoleKind::ALL {
            for ctx in BehaviorContext::ALL {
                let p = params.get(role, ctx).probabilities();
                assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9, "{role}/{}", ctx.as_str());
            }
        }
    }

    #[test]
    fn loads_complete_table() {
        let params = load_behavior_reader(Cursor::new(full_csv())).unwrap();
        let w = params.get(RoleKind::Child, BehaviorContext::Gathering);
        assert_eq!(w.probability(Action::Nothing), 0.6);
    }

    #[test]
    fn missing_row_is_config_error() {
        let csv: String = full_csv().lines().take(9).map(|l| format!("{l}\n")).collect();
        assert!(matches!(load_behavior_reader(Cursor::new(csv)), Err(BehaviorError::Config(_))));
    }

    #[test]
    fn duplicate_row_is_config_error() {
        let mut csv = full_csv();
        csv.push_str("adult,house,0,0,0,0,1\n");
        assert!(matches!(load_behavior_reader(Cursor::new(csv)), Err(BehaviorError::Config(_))));
    }

    #[test]
    fn bad_probabilities_rejected() {
        let csv = full_csv().replace("adult,house,0.1,0.1,0.1,0.1,0.6", "adult,house,0.5,0.5,0.5,0,0");
        assert!(matches!(
            load_behavior_reader(Cursor::new(csv)),
            Err(BehaviorError::InvalidDistribution { .. })
        ));
    }

    #[test]
    fn unknown_role_is_parse_error() {
        let csv = format!("{HEADER}wizard,house,0,0,0,0,1\n");
        assert!(matches!(load_behavior_reader(Cursor::new(csv)), Err(BehaviorError::Parse(_))));
    }
}

// ── Behavior models ───────────────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use super::*;

    fn decide(model: &dyn BehaviorModel, agent: &Agent, cal: Calendar, at_house: bool) -> Action {
        let rules = ScheduleRules::default();
        let ctx = DecisionContext::new(cal, &rules, at_house);
        let mut rng = SimRng::new(0);
        model.decide(agent, &ctx, &mut rng).unwrap()
    }

    #[test]
    fn weekday_branches_on_current_location() {
        let model = TableBehavior::new(marker_params());
        let a = adult(None);
        assert_eq!(decide(&model, &a, Calendar::at(1, 3), true), Action::Shopping);
        assert_eq!(decide(&model, &a, Calendar::at(1, 3), false), Action::SocializeLocal);
    }

    #[test]
    fn weekend_gathering_uses_gathering_table() {
        let model = TableBehavior::new(marker_params());
        let member = adult(Some(LocationId(9)));
        assert_eq!(decide(&model, &member, Calendar::at(0, 2), false), Action::SocializeGlobal);
        // Outside the gathering window the house table applies even away from home.
        assert_eq!(decide(&model, &member, Calendar::at(0, 6), false), Action::Shopping);
    }

    #[test]
    fn weekend_non_member_uses_house_table() {
        let model = TableBehavior::new(marker_params());
        assert_eq!(decide(&model, &child(), Calendar::at(6, 2), false), Action::Shopping);
    }

    #[test]
    fn context_for_matches_decision() {
        let model = TableBehavior::new(marker_params());
        let rules = ScheduleRules::default();
        let member = adult(Some(LocationId(9)));
        let ctx = DecisionContext::new(Calendar::at(0, 1), &rules, false);
        assert_eq!(model.context_for(&member, &ctx), BehaviorContext::Gathering);
        let ctx = DecisionContext::new(Calendar::at(2, 1), &rules, false);
        assert_eq!(model.context_for(&member, &ctx), BehaviorContext::WorkOrSchool);
    }

    #[test]
    fn noop_always_nothing() {
        for hour in 0..12 {
            assert_eq!(decide(&NoopBehavior, &child(), Calendar::at(1, hour), true), Action::Nothing);
        }
    }
}
