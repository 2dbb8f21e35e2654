//! CSV output backend.
//!
//! Creates these files in the configured output directory:
//! - `transmissions.csv`
//! - `daily_status.csv`
//! - `summary.csv`
//! - `agent_snapshots.csv` (only when snapshots are enabled)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, DailyStatusRow, OutputResult, RunSummary, TransmissionRow};

fn opt(v: Option<u32>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Writes run output to CSV files.
pub struct CsvWriter {
    transmissions: Writer<File>,
    daily:         Writer<File>,
    summary:       Writer<File>,
    snapshots:     Option<Writer<File>>,
    finished:      bool,
}

impl CsvWriter {
    /// Create the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path, snapshots: bool) -> OutputResult<Self> {
        let mut transmissions = Writer::from_path(dir.join("transmissions.csv"))?;
        transmissions.write_record(["infected", "infector", "hour"])?;

        let mut daily = Writer::from_path(dir.join("daily_status.csv"))?;
        daily.write_record([
            "day", "susceptible", "infected", "recovered", "vaccinated", "dead", "new_infections",
        ])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["metric", "value"])?;

        let snapshots = if snapshots {
            let mut w = Writer::from_path(dir.join("agent_snapshots.csv"))?;
            w.write_record(["day", "agent_id", "status", "masked", "daytime_location", "gathering"])?;
            Some(w)
        } else {
            None
        };

        Ok(Self { transmissions, daily, summary, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_transmissions(&mut self, rows: &[TransmissionRow]) -> OutputResult<()> {
        for row in rows {
            self.transmissions.write_record(&[
                row.infected.to_string(),
                opt(row.infector),
                row.hour.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_daily_status(&mut self, row: &DailyStatusRow) -> OutputResult<()> {
        self.daily.write_record(&[
            row.day.to_string(),
            row.susceptible.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
            row.vaccinated.to_string(),
            row.dead.to_string(),
            row.new_infections.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        let Some(w) = self.snapshots.as_mut() else {
            return Ok(());
        };
        for row in rows {
            w.write_record(&[
                row.day.to_string(),
                row.agent_id.to_string(),
                row.status.as_str().to_owned(),
                (row.masked as u8).to_string(),
                opt(row.daytime),
                opt(row.gathering),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, s: &RunSummary) -> OutputResult<()> {
        let rows = [
            ("total_infections", s.total_infections.to_string()),
            ("peak_infected", s.peak_infected.to_string()),
            ("peak_day", s.peak_day.to_string()),
            ("deaths", s.deaths.to_string()),
            ("recovered_unmasked_unvaccinated", s.recovered[0][0].to_string()),
            ("recovered_unmasked_vaccinated", s.recovered[0][1].to_string()),
            ("recovered_masked_unvaccinated", s.recovered[1][0].to_string()),
            ("recovered_masked_vaccinated", s.recovered[1][1].to_string()),
        ];
        for (metric, value) in rows {
            self.summary.write_record([metric, value.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transmissions.flush()?;
        self.daily.flush()?;
        self.summary.flush()?;
        if let Some(w) = self.snapshots.as_mut() {
            w.flush()?;
        }
        Ok(())
    }
}
