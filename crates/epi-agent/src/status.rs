//! Disease status of an agent.

use std::fmt;

/// Where an agent sits in the disease state machine.
///
/// The tick engine only ever performs `Susceptible → Infected`,
/// `Recovered/Vaccinated → Infected` (re-infection / breakthrough),
/// `Infected → Recovered`, and `Infected → Dead`.  `Vaccinated` is reached
/// solely through explicit vaccination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiseaseStatus {
    #[default]
    Susceptible,
    Infected,
    Recovered,
    Vaccinated,
    Dead,
}

impl DiseaseStatus {
    pub const ALL: [DiseaseStatus; 5] = [
        DiseaseStatus::Susceptible,
        DiseaseStatus::Infected,
        DiseaseStatus::Recovered,
        DiseaseStatus::Vaccinated,
        DiseaseStatus::Dead,
    ];

    #[inline]
    pub fn is_infected(self) -> bool {
        matches!(self, DiseaseStatus::Infected)
    }

    /// Label used in CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            DiseaseStatus::Susceptible => "susceptible",
            DiseaseStatus::Infected    => "infected",
            DiseaseStatus::Recovered   => "recovered",
            DiseaseStatus::Vaccinated  => "vaccinated",
            DiseaseStatus::Dead        => "dead",
        }
    }
}

impl fmt::Display for DiseaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
