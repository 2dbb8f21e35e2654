//! `epi-schedule`: where every agent belongs at each hour.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`rules`]  | `ScheduleRules`, `Destination`                         |
//!
//! # Reset model (summary)
//!
//! At the start of every hour, before any decision is made, each live agent
//! is moved to its *canonical location*:
//!
//! ```text
//! weekday  adult    hour in shift         -> work
//!          child    hour in school hours  -> school
//! weekend  any      hour in gathering hrs -> gathering (if assigned)
//! otherwise                               -> home
//! ```
//!
//! The engine is pure: it answers "where should this agent be", and the
//! simulation applies the move to the location graph.

pub mod rules;


pub use rules::{Destination, ScheduleRules};
