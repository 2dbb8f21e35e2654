//! Observer trait for reporting and data collection.

use epi_agent::{AgentRegistry, DeadAgent};
use epi_core::Calendar;
use epi_place::LocationGraph;

use crate::TransmissionRecord;

/// Read-only snapshot of model state handed to observers.
#[derive(Copy, Clone)]
pub struct ModelView<'a> {
    pub calendar:      Calendar,
    pub agents:        &'a AgentRegistry,
    pub places:        &'a LocationGraph,
    pub transmissions: &'a [TransmissionRecord],
    pub dead:          &'a [DeadAgent],
}

/// Callbacks invoked by [`Model::step`][crate::Model::step] and the driver
/// loops.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: daily prevalence printer
///
/// ```rust,ignore
/// struct Prevalence;
///
/// impl ModelObserver for Prevalence {
///     fn on_day_end(&mut self, day: u64, view: &ModelView<'_>) {
///         let infected = view.agents.count_status(DiseaseStatus::Infected);
///         println!("day {day}: {infected} infected");
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called after the four phases of every tick, before the calendar
    /// advances.
    fn on_tick_end(&mut self, _view: &ModelView<'_>) {}

    /// Called once per completed day, on its last hour.
    fn on_day_end(&mut self, _day: u64, _view: &ModelView<'_>) {}

    /// Called once when a driver loop finishes.
    fn on_run_end(&mut self, _view: &ModelView<'_>) {}
}

/// A [`ModelObserver`] that does nothing.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
