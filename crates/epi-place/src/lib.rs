//! `epi-place`: the typed location graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`location`] | `LocationKind`, `is_public_facing_industry`                    |
//! | [`graph`]    | `LocationGraph` (kinds + occupancy), `LocationGraphBuilder`    |
//! | [`loader`]   | `load_locations_csv`, `load_locations_reader`                  |
//! | [`error`]    | `PlaceError`, `PlaceResult<T>`                                 |
//!
//! The graph is supplied by the population provider before the first tick;
//! during a run the simulation only moves agents between its nodes.

pub mod error;
pub mod graph;
pub mod loader;
pub mod location;

#[cfg(test)]
mod tests;

pub use error::{PlaceError, PlaceResult};
pub use graph::{LocationGraph, LocationGraphBuilder};
pub use loader::{load_locations_csv, load_locations_reader};
pub use location::{is_public_facing_industry, LocationKind};
