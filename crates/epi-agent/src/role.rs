//! Closed set of agent roles and their role-specific assignments.
//!
//! The variant set is fixed: every agent is exactly one of Adult, Child, or
//! Retiree for its whole lifetime.  Stepping code dispatches with a `match`
//! over [`Role`], never through trait objects.

use std::fmt;

use epi_core::LocationId;

// ── Shift ─────────────────────────────────────────────────────────────────────

/// Inclusive working-hour window `[start, end]` on the 12-hour day.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    pub start: u32,
    pub end:   u32,
}

impl Shift {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// `true` if `hour` falls inside the shift (both ends inclusive).
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }
}

// ── Role payloads ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdultInfo {
    pub work:      LocationId,
    pub income:    f64,
    pub shift:     Shift,
    /// `None` means the adult belongs to no community gathering.
    pub gathering: Option<LocationId>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildInfo {
    pub school:    LocationId,
    pub gathering: Option<LocationId>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetireeInfo {
    pub income:    f64,
    pub gathering: Option<LocationId>,
}

// ── Role ──────────────────────────────────────────────────────────────────────

/// Role variant of an agent, carrying the role-specific assignments.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Adult(AdultInfo),
    Child(ChildInfo),
    Retiree(RetireeInfo),
}

impl Role {
    #[inline]
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::Adult(_)   => RoleKind::Adult,
            Role::Child(_)   => RoleKind::Child,
            Role::Retiree(_) => RoleKind::Retiree,
        }
    }

    /// Community-gathering assignment, if any.
    #[inline]
    pub fn gathering(&self) -> Option<LocationId> {
        match self {
            Role::Adult(a)   => a.gathering,
            Role::Child(c)   => c.gathering,
            Role::Retiree(r) => r.gathering,
        }
    }

    /// Workplace for adults, school for children, `None` for retirees.
    pub fn daytime_location(&self) -> Option<LocationId> {
        match self {
            Role::Adult(a)   => Some(a.work),
            Role::Child(c)   => Some(c.school),
            Role::Retiree(_) => None,
        }
    }

    pub fn income(&self) -> Option<f64> {
        match self {
            Role::Adult(a)   => Some(a.income),
            Role::Child(_)   => None,
            Role::Retiree(r) => Some(r.income),
        }
    }
}

// ── RoleKind ──────────────────────────────────────────────────────────────────

/// Payload-free role tag, used to index per-role parameter tables.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoleKind {
    Adult   = 0,
    Child   = 1,
    Retiree = 2,
}

impl RoleKind {
    pub const ALL: [RoleKind; 3] = [RoleKind::Adult, RoleKind::Child, RoleKind::Retiree];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maximum age gap (years, exclusive) for a global-socialising partner.
    pub fn friend_radius(self) -> u32 {
        match self {
            RoleKind::Adult   => 10,
            RoleKind::Child   => 5,
            RoleKind::Retiree => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::Adult   => "adult",
            RoleKind::Child   => "child",
            RoleKind::Retiree => "retiree",
        }
    }

    /// Parse the lowercase label produced by [`as_str`](Self::as_str).
    pub fn parse(s: &str) -> Option<RoleKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult"   => Some(RoleKind::Adult),
            "child"   => Some(RoleKind::Child),
            "retiree" => Some(RoleKind::Retiree),
            _ => None,
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
