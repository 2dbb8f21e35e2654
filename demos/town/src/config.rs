//! JSON run configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use epi_core::SimConfig;
use epi_disease::DiseaseParameters;
use epi_schedule::ScheduleRules;

/// Shape of the synthetic town.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TownConfig {
    pub households: u32,
    pub workplaces: u32,
    pub schools:    u32,
    /// NAICS industry code of each business; the code decides whether the
    /// business is public-facing.
    pub businesses: Vec<u32>,
    pub gatherings: u32,
    /// Share of agents assigned to a community gathering.
    pub gathering_share: f64,
    /// Share of agents with a mask-adoption policy.
    pub mask_share: f64,
}

impl Default for TownConfig {
    fn default() -> Self {
        Self {
            households:      150,
            workplaces:      12,
            schools:         2,
            businesses:      vec![4451, 4521, 7225, 7225, 8121, 6211, 3111, 4841],
            gatherings:      3,
            gathering_share: 0.4,
            mask_share:      0.3,
        }
    }
}

/// Everything the driver needs.  Every field has a default, so `{}` is a
/// valid config file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub sim:                SimConfig,
    pub disease:            DiseaseParameters,
    pub rules:              ScheduleRules,
    pub town:               TownConfig,
    /// Behavior tables CSV; the built-in tables are used when absent.
    pub behavior_csv:       Option<PathBuf>,
    pub initial_infected:   usize,
    pub initial_vaccinated: usize,
    pub output_dir:         PathBuf,
    pub snapshots:          bool,
    pub log_level:          String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sim:                SimConfig { duration_days: 90, ..Default::default() },
            disease:            DiseaseParameters::default(),
            rules:              ScheduleRules::default(),
            town:               TownConfig::default(),
            behavior_csv:       None,
            initial_infected:   5,
            initial_vaccinated: 0,
            output_dir:         PathBuf::from("output/town"),
            snapshots:          false,
            log_level:          "info".to_owned(),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
