//! Synthetic town: houses, workplaces, schools, businesses, gatherings, and
//! the households that live there.

use anyhow::{ensure, Result};

use epi_agent::{AdultInfo, AgentRegistry, ChildInfo, MaskPolicy, PopulationBuilder, RetireeInfo, Shift, Sex};
use epi_core::{AgentId, LocationId, SimRng};
use epi_place::{LocationGraph, LocationGraphBuilder, LocationKind};

use crate::config::TownConfig;

pub struct Town {
    pub agents: AgentRegistry,
    pub places: LocationGraph,
}

struct Sites {
    works:      Vec<LocationId>,
    schools:    Vec<LocationId>,
    gatherings: Vec<LocationId>,
}

impl Sites {
    fn gathering(&self, share: f64, rng: &mut SimRng) -> Option<LocationId> {
        if rng.gen_bool(share) { rng.choose(&self.gatherings).copied() } else { None }
    }
}

/// Build a town from `cfg`, drawing from a stream separate from the run's.
pub fn build(cfg: &TownConfig, seed: u64) -> Result<Town> {
    ensure!(cfg.households > 0, "town needs at least one household");
    ensure!(cfg.workplaces > 0, "town needs at least one workplace");
    ensure!(cfg.schools > 0, "town needs at least one school");

    let mut rng = SimRng::new(seed ^ 0x5eed_70a1);
    let mut b = LocationGraphBuilder::new();
    let houses = b.add_many(LocationKind::House, cfg.households as usize);
    let sites = Sites {
        works:      b.add_many(LocationKind::Work, cfg.workplaces as usize),
        schools:    b.add_many(LocationKind::School, cfg.schools as usize),
        gatherings: b.add_many(LocationKind::CommunityGathering, cfg.gatherings as usize),
    };
    for &code in &cfg.businesses {
        b.add(LocationKind::business(code));
    }

    let mut pop = PopulationBuilder::new();
    let mut next = 0u32;
    let mut id = || {
        next += 1;
        AgentId(next - 1)
    };

    for &home in &houses {
        let adults = rng.gen_range(1..=2);
        let children = if rng.gen_bool(0.6) { rng.gen_range(1..=3) } else { 0 };
        let retirees = if rng.gen_bool(0.25) { rng.gen_range(1..=2) } else { 0 };

        for _ in 0..adults {
            let start = rng.gen_range(0..=3);
            let info = AdultInfo {
                work:      sites.works[rng.gen_range(0..sites.works.len())],
                income:    rng.gen_range(20_000.0..120_000.0),
                shift:     Shift::new(start, start + rng.gen_range(5..=8)),
                gathering: sites.gathering(cfg.gathering_share, &mut rng),
            };
            pop = pop.adult(id(), rng.gen_range(18..65), home, info);
        }
        for _ in 0..children {
            let info = ChildInfo {
                school:    sites.schools[rng.gen_range(0..sites.schools.len())],
                gathering: sites.gathering(cfg.gathering_share, &mut rng),
            };
            pop = pop.child(id(), rng.gen_range(4..18), home, info);
        }
        for _ in 0..retirees {
            let info = RetireeInfo {
                income:    rng.gen_range(10_000.0..60_000.0),
                gathering: sites.gathering(cfg.gathering_share, &mut rng),
            };
            pop = pop.retiree(id(), rng.gen_range(65..95), home, info);
        }
    }

    let mut agents = pop.build()?;
    for agent in agents.iter_mut() {
        if rng.gen_bool(0.5) {
            agent.sex = Sex::Male;
        }
        if rng.gen_bool(cfg.mask_share) {
            let t = rng.gen_range(0.01..0.10);
            agent.masks = MaskPolicy { will_mask: [false; 3], thresholds: [t, t * 2.0, t * 1.5], ..MaskPolicy::never() };
        }
    }

    Ok(Town { agents, places: b.build() })
}
