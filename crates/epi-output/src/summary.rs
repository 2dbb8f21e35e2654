//! End-of-run summary statistics.

use std::fmt;

use epi_agent::DiseaseStatus;
use epi_sim::ModelView;

/// Totals for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Length of the transmission network, seeded cases included.
    pub total_infections: usize,
    /// Highest end-of-day count of concurrently infected agents.
    pub peak_infected:    usize,
    /// First day on which `peak_infected` was reached.
    pub peak_day:         u64,
    pub deaths:           usize,
    /// Live Recovered agents, indexed `[ever masked][vaccinated]`.
    pub recovered:        [[usize; 2]; 2],
}

impl RunSummary {
    /// Build from the final model state and the tracked daily peak.
    pub fn from_view(view: &ModelView<'_>, peak_infected: usize, peak_day: u64) -> Self {
        let mut recovered = [[0; 2]; 2];
        for agent in view.agents.iter().filter(|a| a.status == DiseaseStatus::Recovered) {
            recovered[agent.masks.ever_masked() as usize][agent.vaccinated as usize] += 1;
        }
        Self {
            total_infections: view.transmissions.len(),
            peak_infected,
            peak_day,
            deaths: view.dead.len(),
            recovered,
        }
    }

    pub fn total_recovered(&self) -> usize {
        self.recovered.iter().flatten().sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total infections: {}", self.total_infections)?;
        writeln!(f, "peak infected:    {} (day {})", self.peak_infected, self.peak_day)?;
        writeln!(f, "deaths:           {}", self.deaths)?;
        writeln!(f, "recovered:        {}", self.total_recovered())?;
        writeln!(f, "                  unvaccinated  vaccinated")?;
        writeln!(f, "  unmasked        {:>12}  {:>10}", self.recovered[0][0], self.recovered[0][1])?;
        write!(f, "  masked          {:>12}  {:>10}", self.recovered[1][0], self.recovered[1][1])
    }
}
