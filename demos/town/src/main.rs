//! town: end-to-end driver for the epi epidemic model.
//!
//! Builds a synthetic town, seeds infections, steps hour by hour until the
//! epidemic dies out or the configured duration ends, and writes the
//! transmission network, daily status counts, and a run summary as CSV.
//!
//! ```text
//! cargo run --release -p town -- [config.json]
//! ```
//!
//! Without an argument the built-in defaults are used.

mod config;
mod town;

use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::{info, warn, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use epi_behavior::{load_behavior_csv, BehaviorParameters, TableBehavior};
use epi_output::{CsvWriter, ModelOutputObserver};
use epi_sim::{no_infected_remaining, ModelBuilder, SeedOutcome};

use config::RunConfig;

// ISO 8601 timestamp and a colour-coded level tag.
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

fn init_logging(level: &str) -> Result<()> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("unknown log level {level:?}"))?;
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(Path::new(&path))?,
        None => RunConfig::default(),
    };
    init_logging(&cfg.log_level)?;

    // 1. Town.
    let town = town::build(&cfg.town, cfg.sim.seed)?;
    info!(
        "town: {} agents in {} households, {} locations",
        town.agents.len(),
        cfg.town.households,
        town.places.len(),
    );

    // 2. Behavior tables.
    let params = match &cfg.behavior_csv {
        Some(path) => load_behavior_csv(path)
            .with_context(|| format!("loading behavior tables {}", path.display()))?,
        None => BehaviorParameters::default(),
    };

    // 3. Model.
    let mut model = ModelBuilder::new(cfg.sim.clone(), town.agents, town.places, TableBehavior::new(params))
        .rules(cfg.rules.clone())
        .disease(cfg.disease.clone())
        .build()?;

    let vaccinated = model.vaccinate_random(cfg.initial_vaccinated)?;
    match model.infect(cfg.initial_infected) {
        SeedOutcome::Infected(n) => info!("seeded {n} infections, vaccinated {vaccinated}"),
        SeedOutcome::NoSusceptibles => warn!("no susceptible agents to seed"),
    }

    // 4. Output.
    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating {}", cfg.output_dir.display()))?;
    let writer = CsvWriter::new(&cfg.output_dir, cfg.snapshots)?;
    let mut obs = ModelOutputObserver::new(writer);
    if cfg.snapshots {
        obs = obs.with_snapshots();
    }

    // 5. Run.
    let t0 = Instant::now();
    let ticks = model.run_until(no_infected_remaining, cfg.sim.total_ticks(), &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!("output error: {e}");
    }
    info!(
        "finished after {ticks} ticks ({}) in {:.3} s",
        model.calendar,
        elapsed.as_secs_f64(),
    );
    if let Some(summary) = obs.summary() {
        for line in summary.to_string().lines() {
            info!("{line}");
        }
    }
    info!("output written to {}", cfg.output_dir.display());
    Ok(())
}
