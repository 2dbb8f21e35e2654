//! Location graph and occupancy index.
//!
//! # Data layout
//!
//! Nodes are indexed by `LocationId` (dense, from 0).  For each node the
//! graph stores its [`LocationKind`] and the list of agents currently there:
//!
//! ```text
//! kinds[loc]      -> LocationKind
//! occupants[loc]  -> Vec<AgentId>
//! ```
//!
//! Business ids are cached at build time so that "pick a random business" is
//! a single slice draw.

use epi_core::{AgentId, LocationId};

use crate::{LocationKind, PlaceError, PlaceResult};

// ── LocationGraph ─────────────────────────────────────────────────────────────

pub struct LocationGraph {
    kinds:      Vec<LocationKind>,
    occupants:  Vec<Vec<AgentId>>,
    businesses: Vec<LocationId>,
}

impl LocationGraph {
    /// A graph with no locations.
    pub fn empty() -> Self {
        LocationGraphBuilder::new().build()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline]
    pub fn contains(&self, loc: LocationId) -> bool {
        loc.index() < self.kinds.len()
    }

    #[inline]
    pub fn kind(&self, loc: LocationId) -> Option<LocationKind> {
        self.kinds.get(loc.index()).copied()
    }

    /// Like [`kind`](Self::kind) but returns an error for unknown ids.
    pub fn require(&self, loc: LocationId) -> PlaceResult<LocationKind> {
        self.kind(loc).ok_or(PlaceError::NotFound(loc))
    }

    #[inline]
    pub fn is_house(&self, loc: LocationId) -> bool {
        self.kind(loc).is_some_and(LocationKind::is_house)
    }

    #[inline]
    pub fn is_public_facing(&self, loc: LocationId) -> bool {
        self.kind(loc).is_some_and(LocationKind::is_public_facing)
    }

    /// Every business location, ascending.
    pub fn businesses(&self) -> &[LocationId] {
        &self.businesses
    }

    /// Ids of all locations of a given kind (ignoring business flags).
    pub fn ids_of_kind(&self, kind: LocationKind) -> Vec<LocationId> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| std::mem::discriminant(*k) == std::mem::discriminant(&kind))
            .map(|(i, _)| LocationId(i as u32))
            .collect()
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// Agents currently at `loc` (empty for unknown ids).
    #[inline]
    pub fn occupants(&self, loc: LocationId) -> &[AgentId] {
        self.occupants.get(loc.index()).map_or(&[], Vec::as_slice)
    }

    /// Put `agent` at `loc` without removing it from anywhere.
    pub fn place(&mut self, agent: AgentId, loc: LocationId) -> PlaceResult<()> {
        self.occupants
            .get_mut(loc.index())
            .ok_or(PlaceError::NotFound(loc))?
            .push(agent);
        Ok(())
    }

    /// Take `agent` out of `loc`.  Returns `false` if it was not there.
    pub fn remove(&mut self, agent: AgentId, loc: LocationId) -> bool {
        let Some(list) = self.occupants.get_mut(loc.index()) else {
            return false;
        };
        match list.iter().position(|&a| a == agent) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move `agent` from `from` to `to`.  A no-op when `from == to`.
    pub fn move_agent(&mut self, agent: AgentId, from: LocationId, to: LocationId) -> PlaceResult<()> {
        if from == to {
            return Ok(());
        }
        if !self.contains(to) {
            return Err(PlaceError::NotFound(to));
        }
        self.remove(agent, from);
        self.place(agent, to)
    }

    /// Total agents across all locations.
    pub fn occupancy(&self) -> usize {
        self.occupants.iter().map(Vec::len).sum()
    }
}

// ── LocationGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`LocationGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use epi_place::{LocationGraphBuilder, LocationKind};
///
/// let mut b = LocationGraphBuilder::new();
/// let home = b.add(LocationKind::House);
/// let shop = b.add(LocationKind::business(4451)); // grocery store
/// let graph = b.build();
/// assert!(graph.is_house(home));
/// assert!(graph.is_public_facing(shop));
/// assert_eq!(graph.businesses(), &[shop]);
/// ```
#[derive(Default)]
pub struct LocationGraphBuilder {
    kinds: Vec<LocationKind>,
}

impl LocationGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { kinds: Vec::with_capacity(n) }
    }

    /// Add a location and return its `LocationId` (sequential from 0).
    pub fn add(&mut self, kind: LocationKind) -> LocationId {
        let id = LocationId(self.kinds.len() as u32);
        self.kinds.push(kind);
        id
    }

    /// Add `n` locations of the same kind.
    pub fn add_many(&mut self, kind: LocationKind, n: usize) -> Vec<LocationId> {
        (0..n).map(|_| self.add(kind)).collect()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn build(self) -> LocationGraph {
        let businesses = self
            .kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| k.is_business())
            .map(|(i, _)| LocationId(i as u32))
            .collect();
        LocationGraph {
            occupants: vec![Vec::new(); self.kinds.len()],
            kinds: self.kinds,
            businesses,
        }
    }
}
