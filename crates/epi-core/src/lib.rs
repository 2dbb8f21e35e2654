//! `epi-core`: foundational types for the `epi` epidemic model.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `LocationId`                               |
//! | [`time`]        | `Calendar` (12-hour day, weekend rule), `SimConfig`   |
//! | [`rng`]         | `SimRng` (the single seeded stream of a run)          |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpiError, EpiResult};
pub use ids::{AgentId, LocationId};
pub use rng::SimRng;
pub use time::{Calendar, SimConfig, HOURS_PER_DAY, WEEKEND_PERIOD};
