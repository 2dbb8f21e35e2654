//! Disease parameter set.

use serde::Deserialize;

use crate::{DiseaseError, DiseaseResult};

// ── InfectivityCurve ──────────────────────────────────────────────────────────

/// γ(t) = a·t / (1 + (t/b)^k), with `t` in days since infection.
///
/// Rises roughly linearly at first, peaks near `t = b`, then decays like
/// `t^(1-k)`.  Zero at `t = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct InfectivityCurve {
    /// Scale.
    pub a: f64,
    /// Location of the peak (days).
    pub b: f64,
    /// Decay exponent; must exceed 1 for the curve to fall after the peak.
    pub k: f64,
}

impl Default for InfectivityCurve {
    fn default() -> Self {
        Self { a: 1.0, b: 3.0, k: 3.0 }
    }
}

impl InfectivityCurve {
    #[inline]
    pub fn gamma(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        self.a * t / (1.0 + (t / self.b).powf(self.k))
    }
}

// ── DiseaseParameters ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiseaseParameters {
    /// Days from infection to recovery.
    pub infectious_period: f64,
    /// Probability that a Recovered agent is open to reinfection on contact.
    pub reinfection_prob: f64,
    /// Probability that a Vaccinated agent is open to infection on contact.
    pub vaccine_breakthrough: f64,
    pub infectivity: InfectivityCurve,
}

impl Default for DiseaseParameters {
    fn default() -> Self {
        Self {
            infectious_period:    14.0,
            reinfection_prob:     0.01,
            vaccine_breakthrough: 0.05,
            infectivity:          InfectivityCurve::default(),
        }
    }
}

impl DiseaseParameters {
    /// γ(t) under this parameter set.
    #[inline]
    pub fn gamma(&self, t: f64) -> f64 {
        self.infectivity.gamma(t)
    }

    /// Check every field is usable.  Called once at model construction.
    pub fn validate(&self) -> DiseaseResult<()> {
        fn invalid(name: &'static str, value: f64, reason: &'static str) -> DiseaseError {
            DiseaseError::InvalidParameter { name, value, reason }
        }

        if !(self.infectious_period.is_finite() && self.infectious_period > 0.0) {
            return Err(invalid("infectious_period", self.infectious_period, "must be positive"));
        }
        for (name, p) in [
            ("reinfection_prob", self.reinfection_prob),
            ("vaccine_breakthrough", self.vaccine_breakthrough),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(name, p, "must be a probability in [0, 1]"));
            }
        }
        let c = &self.infectivity;
        if !(c.a.is_finite() && c.a >= 0.0) {
            return Err(invalid("infectivity.a", c.a, "must be non-negative"));
        }
        if !(c.b.is_finite() && c.b > 0.0) {
            return Err(invalid("infectivity.b", c.b, "must be positive"));
        }
        if !(c.k.is_finite() && c.k > 1.0) {
            return Err(invalid("infectivity.k", c.k, "must exceed 1"));
        }
        Ok(())
    }
}
