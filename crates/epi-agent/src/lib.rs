//! `epi-agent`: agent records and the live agent registry.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`status`]    | `DiseaseStatus`                                               |
//! | [`role`]      | `Role` (Adult / Child / Retiree), `RoleKind`, `Shift`         |
//! | [`mask`]      | `MaskContext`, `MaskPolicy`                                   |
//! | [`action`]    | `Action`: the five outcomes of the hourly decision           |
//! | [`agent`]     | `Agent` (shared base record), `DeadAgent`, `Sex`              |
//! | [`ledger`]    | `ContactLedger`: symmetric per-pair interaction weights      |
//! | [`registry`]  | `AgentRegistry`: live agents in ascending id order           |
//! | [`builder`]   | `PopulationBuilder` (fluent construction)                     |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                     |
//! |----------|------------------------------------------------------------|
//! | `serde`  | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod action;
pub mod agent;
pub mod builder;
pub mod error;
pub mod ledger;
pub mod mask;
pub mod registry;
pub mod role;
pub mod status;


pub use action::Action;
pub use agent::{Agent, DeadAgent, Sex};
pub use builder::PopulationBuilder;
pub use error::{AgentError, AgentResult};
pub use ledger::ContactLedger;
pub use mask::{MaskContext, MaskPolicy};
pub use registry::AgentRegistry;
pub use role::{AdultInfo, ChildInfo, RetireeInfo, Role, RoleKind, Shift};
pub use status::DiseaseStatus;
