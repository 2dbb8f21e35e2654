//! `epi-disease`: the within-host and between-host disease rules.
//!
//! # Crate layout
//!
//! | Module             | Contents                                                  |
//! |--------------------|-----------------------------------------------------------|
//! | [`params`]         | `DiseaseParameters`, `InfectivityCurve` (γ(t))            |
//! | [`progression`]    | `ifr`, `progress`, `Progression`                          |
//! | [`transmission`]   | `transmission_probability`, `transmission_succeeds`       |
//! | [`error`]          | `DiseaseError`, `DiseaseResult<T>`                        |
//!
//! Everything here is a pure function of agent state, parameters, and the
//! run's `SimRng`.  Removing a dead agent from the registry, logging the
//! transmission network, and touching the contact ledger are the
//! simulation's job.

pub mod error;
pub mod params;
pub mod progression;
pub mod transmission;


pub use error::{DiseaseError, DiseaseResult};
pub use params::{DiseaseParameters, InfectivityCurve};
pub use progression::{ifr, progress, Progression, TICK_DAYS};
pub use transmission::{transmission_probability, transmission_succeeds, MASK_FACTOR};
