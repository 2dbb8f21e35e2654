//! Behavior probability tables.
//!
//! For each role and each decision context there is one 5-vector over
//! `[SocializeLocal, SocializeGlobal, HangWithFriends, Shopping, Nothing]`.

use epi_agent::RoleKind;
use epi_core::SimRng;

use crate::sampler::{draw, validate};
use crate::{Action, BehaviorError, BehaviorResult};

// ── ActionWeights ─────────────────────────────────────────────────────────────

/// A validated probability vector over the five actions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActionWeights([f64; Action::COUNT]);

impl ActionWeights {
    /// All mass on `Action::Nothing`.
    pub const IDLE: ActionWeights = ActionWeights([0.0, 0.0, 0.0, 0.0, 1.0]);

    pub fn new(probs: [f64; Action::COUNT]) -> BehaviorResult<Self> {
        validate(&probs)?;
        Ok(Self(probs))
    }

    pub fn probabilities(&self) -> &[f64; Action::COUNT] {
        &self.0
    }

    #[inline]
    pub fn probability(&self, action: Action) -> f64 {
        self.0[action.index()]
    }

    /// Draw one action.  Infallible: the vector was validated on construction.
    pub fn sample(&self, rng: &mut SimRng) -> Action {
        Action::from_index(draw(&self.0, 1.0, rng.uniform()))
    }
}

// ── BehaviorContext ───────────────────────────────────────────────────────────

/// Which table applies to a decision.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BehaviorContext {
    /// At a house (weekday), or any weekend hour outside a gathering.
    House        = 0,
    /// At work or school on a weekday.
    WorkOrSchool = 1,
    /// At the community gathering on a weekend.
    Gathering    = 2,
}

impl BehaviorContext {
    pub const ALL: [BehaviorContext; 3] =
        [BehaviorContext::House, BehaviorContext::WorkOrSchool, BehaviorContext::Gathering];

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorContext::House        => "house",
            BehaviorContext::WorkOrSchool => "work_or_school",
            BehaviorContext::Gathering    => "gathering",
        }
    }

    pub fn parse(s: &str) -> Option<BehaviorContext> {
        match s.trim() {
            "house" | "home"                   => Some(BehaviorContext::House),
            "work_or_school" | "work" | "school" => Some(BehaviorContext::WorkOrSchool),
            "gathering"                        => Some(BehaviorContext::Gathering),
            _ => None,
        }
    }
}

// ── BehaviorParameters ────────────────────────────────────────────────────────

/// Per-role, per-context action probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorParameters {
    tables: [[ActionWeights; 3]; 3],
}

impl BehaviorParameters {
    /// Build from explicit `(role, context, weights)` entries.  Every one of
    /// the nine role/context combinations must appear exactly once.
    pub fn from_entries<I>(entries: I) -> BehaviorResult<Self>
    where
        I: IntoIterator<Item = (RoleKind, BehaviorContext, ActionWeights)>,
    {
        let mut slots: [[Option<ActionWeights>; 3]; 3] = [[None; 3]; 3];
        for (role, ctx, weights) in entries {
            let slot = &mut slots[role.index()][ctx as usize];
            if slot.replace(weights).is_some() {
                return Err(BehaviorError::Config(format!(
                    "duplicate behavior table for {role}/{}",
                    ctx.as_str()
                )));
            }
        }

        let mut tables = [[ActionWeights::IDLE; 3]; 3];
        for role in RoleKind::ALL {
            for ctx in BehaviorContext::ALL {
                tables[role.index()][ctx as usize] = slots[role.index()][ctx as usize]
                    .ok_or_else(|| {
                        BehaviorError::Config(format!(
                            "missing behavior table for {role}/{}",
                            ctx.as_str()
                        ))
                    })?;
            }
        }
        Ok(Self { tables })
    }

    /// Every role does nothing in every context.
    pub fn idle() -> Self {
        Self { tables: [[ActionWeights::IDLE; 3]; 3] }
    }

    #[inline]
    pub fn get(&self, role: RoleKind, ctx: BehaviorContext) -> &ActionWeights {
        &self.tables[role.index()][ctx as usize]
    }

    /// Replace one table.
    pub fn set(&mut self, role: RoleKind, ctx: BehaviorContext, weights: ActionWeights) {
        self.tables[role.index()][ctx as usize] = weights;
    }
}

impl Default for BehaviorParameters {
    /// Mostly-idle defaults with socialising concentrated at gatherings.
    fn default() -> Self {
        use BehaviorContext::{Gathering, House, WorkOrSchool};
        use RoleKind::{Adult, Child, Retiree};

        let w = ActionWeights;
        let mut params = Self::idle();
        params.set(Adult,   House,        w([0.05, 0.02, 0.03, 0.05, 0.85]));
        params.set(Adult,   WorkOrSchool, w([0.10, 0.01, 0.00, 0.02, 0.87]));
        params.set(Adult,   Gathering,    w([0.30, 0.00, 0.00, 0.00, 0.70]));
        params.set(Child,   House,        w([0.05, 0.01, 0.04, 0.01, 0.89]));
        params.set(Child,   WorkOrSchool, w([0.20, 0.00, 0.00, 0.00, 0.80]));
        params.set(Child,   Gathering,    w([0.30, 0.00, 0.00, 0.00, 0.70]));
        params.set(Retiree, House,        w([0.03, 0.01, 0.03, 0.05, 0.88]));
        params.set(Retiree, WorkOrSchool, w([0.05, 0.00, 0.00, 0.02, 0.93]));
        params.set(Retiree, Gathering,    w([0.30, 0.00, 0.00, 0.00, 0.70]));
        params
    }
}
