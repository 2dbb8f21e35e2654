//! `ModelOutputObserver<W>`: bridges `ModelObserver` to an `OutputWriter`.

use log::warn;

use epi_agent::DiseaseStatus;
use epi_sim::{ModelObserver, ModelView};

use crate::row::{AgentSnapshotRow, DailyStatusRow, TransmissionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RunSummary};

/// A [`ModelObserver`] that streams the transmission network and daily
/// status counts to any [`OutputWriter`], and writes a [`RunSummary`] when
/// the run ends.
///
/// A run that stops partway through a day (see `Model::run_until`) gets one
/// closing [`DailyStatusRow`] for that partial day.  Per-run state is reset
/// after the summary is written, so one observer can watch several models.
///
/// Errors from the writer are stored internally because `ModelObserver`
/// methods have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct ModelOutputObserver<W: OutputWriter> {
    writer:      W,
    /// Transmission records already handed to the writer.
    written:     usize,
    peak:        usize,
    peak_day:    u64,
    snapshots:   bool,
    summary:     Option<RunSummary>,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> ModelOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written:    0,
            peak:       0,
            peak_day:   0,
            snapshots:  false,
            summary:    None,
            last_error: None,
        }
    }

    /// Also emit one [`AgentSnapshotRow`] per live agent at every day end.
    pub fn with_snapshots(mut self) -> Self {
        self.snapshots = true;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// The summary written at the end of the last run.
    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    /// Write transmission records logged since the last flush.  Returns how
    /// many were new.
    fn flush_transmissions(&mut self, view: &ModelView<'_>) -> usize {
        let fresh: Vec<TransmissionRow> = view
            .transmissions
            .get(self.written..)
            .unwrap_or_default()
            .iter()
            .map(TransmissionRow::from)
            .collect();
        self.written = view.transmissions.len();
        if !fresh.is_empty() {
            let result = self.writer.write_transmissions(&fresh);
            self.store_err(result);
        }
        fresh.len()
    }

    /// Write the status row (and snapshots) for `day` and track the peak.
    fn record_day(&mut self, day: u64, view: &ModelView<'_>) {
        let new_infections = self.flush_transmissions(view);
        let count = |s| view.agents.count_status(s);
        let row = DailyStatusRow {
            day,
            susceptible: count(DiseaseStatus::Susceptible),
            infected:    count(DiseaseStatus::Infected),
            recovered:   count(DiseaseStatus::Recovered),
            vaccinated:  count(DiseaseStatus::Vaccinated),
            dead:        view.dead.len(),
            new_infections,
        };
        if row.infected > self.peak {
            self.peak = row.infected;
            self.peak_day = day;
        }
        let result = self.writer.write_daily_status(&row);
        self.store_err(result);

        if self.snapshots {
            let rows: Vec<AgentSnapshotRow> =
                view.agents.iter().map(|a| AgentSnapshotRow::of(day, a)).collect();
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }
}

impl<W: OutputWriter> ModelObserver for ModelOutputObserver<W> {
    fn on_day_end(&mut self, day: u64, view: &ModelView<'_>) {
        self.record_day(day, view);
    }

    fn on_run_end(&mut self, view: &ModelView<'_>) {
        // The calendar has already advanced past the last tick run.
        if view.calendar.hour != 0 {
            self.record_day(view.calendar.day, view);
        }
        self.flush_transmissions(view);
        let summary = RunSummary::from_view(view, self.peak, self.peak_day);
        let result = self.writer.write_summary(&summary).and_then(|()| self.writer.finish());
        self.store_err(result);
        self.summary = Some(summary);

        self.written = 0;
        self.peak = 0;
        self.peak_day = 0;
    }
}
