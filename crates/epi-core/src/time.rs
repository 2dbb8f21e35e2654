//! Simulation calendar.
//!
//! # Design
//!
//! One tick is one simulated hour and a simulated day has
//! [`HOURS_PER_DAY`] = 12 waking hours.  The calendar holds the hour of day
//! (`0..12`), the day index, and a global step counter:
//!
//!   absolute_hour = day * 12 + hour
//!
//! Day `d` is a weekend day when `d % WEEKEND_PERIOD == 0`, so day 0 (the
//! first simulated day) is a weekend day.

use std::fmt;

use crate::{EpiError, EpiResult};

/// Ticks in one simulated day.
pub const HOURS_PER_DAY: u32 = 12;

/// Every day whose index is a multiple of this is a weekend day.
pub const WEEKEND_PERIOD: u64 = 6;

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Current position of the simulation in (day, hour) terms.
///
/// `Calendar` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    /// Hour of the simulated day, `0..HOURS_PER_DAY`.
    pub hour: u32,
    /// Index of the current day, starting at 0.
    pub day: u64,
    /// Total ticks executed so far.
    pub step: u64,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a calendar positioned at `(day, hour)` (step counter = 0).
    pub fn at(day: u64, hour: u32) -> Self {
        debug_assert!(hour < HOURS_PER_DAY, "hour must be < {HOURS_PER_DAY}");
        Self { hour, day, step: 0 }
    }

    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.day % WEEKEND_PERIOD == 0
    }

    #[inline]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Hours since the start of the run: `day * 12 + hour`.
    #[inline]
    pub fn absolute_hour(&self) -> u64 {
        self.day * HOURS_PER_DAY as u64 + self.hour as u64
    }

    /// `true` on the last hour of the day, right before the wrap to hour 0.
    #[inline]
    pub fn is_last_hour(&self) -> bool {
        self.hour + 1 == HOURS_PER_DAY
    }

    /// Advance one tick.  Returns `true` when the day counter rolled over.
    pub fn advance(&mut self) -> bool {
        let rolled = self.is_last_hour();
        if rolled {
            self.day += 1;
        }
        self.hour = (self.hour + 1) % HOURS_PER_DAY;
        self.step += 1;
        rolled
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_weekend() { "weekend" } else { "weekday" };
        write!(f, "day {} hour {:02} ({kind}, step {})", self.day, self.hour, self.step)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the driver binary and passed to the
/// model builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Days to simulate when running a fixed duration (`12 * days` ticks).
    pub duration_days: u64,

    /// Re-evaluate every agent's mask choices against infected prevalence at
    /// the end of each day.
    pub mask_adoption: bool,
}

impl SimConfig {
    /// Total ticks of a fixed-duration run.
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.duration_days * HOURS_PER_DAY as u64
    }

    /// A run must cover at least one day.
    pub fn validate(&self) -> EpiResult<()> {
        if self.duration_days == 0 {
            return Err(EpiError::Config("duration_days must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42, duration_days: 30, mask_adoption: false }
    }
}
