//! `epi-sim`: the hourly stepping engine.
//!
//! # Four-phase tick
//!
//! ```text
//! for each tick:
//!   ① Progression: clear pending actions; advance every infected agent's
//!                   illness (recover / die).  The dead leave the registry
//!                   and the occupancy index before anything else runs.
//!   ② Reset:       move every live agent to its canonical location
//!                   (work, school, gathering, or home).
//!   ③ Decide:      BehaviorModel::decide for every agent.
//!   ④ Interact:    execute every pending action in ascending AgentId
//!                   order; contacts update the ledger and may transmit.
//!   last hour of the day → observer.on_day_end, optional mask adoption.
//!   calendar.advance()
//! ```
//!
//! Each phase completes for all agents before the next begins.  One
//! `SimRng` drives every draw, so identical seeds and populations produce
//! identical transmission networks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_behavior::TableBehavior;
//! use epi_core::SimConfig;
//! use epi_sim::{no_infected_remaining, ModelBuilder, NoopObserver};
//!
//! let mut model = ModelBuilder::new(SimConfig::default(), agents, places, TableBehavior::default())
//!     .build()?;
//! model.infect(5);
//! model.run_until(no_infected_remaining, model.config.total_ticks(), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod interaction;
pub mod model;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use interaction::Interaction;
pub use model::{no_infected_remaining, Model, SeedOutcome, TransmissionRecord};
pub use observer::{ModelObserver, ModelView, NoopObserver};
