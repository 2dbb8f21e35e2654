//! `epi-behavior`: how an agent chooses its action each hour.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`sampler`] | `spin`, `spin_weighted`, `spin_first_match` (inverse-CDF draws)   |
//! | [`params`]  | `ActionWeights`, `BehaviorContext`, `BehaviorParameters`          |
//! | [`loader`]  | `load_behavior_csv`, `load_behavior_reader`                       |
//! | [`context`] | `DecisionContext<'a>`: what an agent sees when deciding          |
//! | [`model`]   | `BehaviorModel` trait                                             |
//! | [`table`]   | `TableBehavior`: role/context probability tables                 |
//! | [`noop`]    | `NoopBehavior`: always chooses `Action::Nothing`                 |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Design notes
//!
//! Decisions run in the third phase of a tick, after every agent has been
//! reset to its canonical location, so `DecisionContext::at_house` reflects
//! where the agent actually is this hour.  A `BehaviorModel` only reads the
//! agent and the context; it never mutates simulation state.

pub mod context;
pub mod error;
pub mod loader;
pub mod model;
pub mod noop;
pub mod params;
pub mod sampler;
pub mod table;

#[cfg(test)]
mod tests;

pub use epi_agent::Action;

pub use context::DecisionContext;
pub use error::{BehaviorError, BehaviorResult};
pub use loader::{load_behavior_csv, load_behavior_reader};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use params::{ActionWeights, BehaviorContext, BehaviorParameters};
pub use sampler::{spin, spin_first_match, spin_weighted};
pub use table::TableBehavior;
