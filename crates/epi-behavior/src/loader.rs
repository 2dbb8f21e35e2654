//! CSV behavior-table loader.
//!
//! # CSV format
//!
//! One row per role/context pair; all nine pairs are required.
//!
//! ```csv
//! role,context,socialize_local,socialize_global,hang_with_friends,shopping,nothing
//! adult,house,0.05,0.02,0.03,0.05,0.85
//! adult,work_or_school,0.10,0.01,0.00,0.02,0.87
//! adult,gathering,0.30,0.00,0.00,0.00,0.70
//! ...
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use epi_agent::RoleKind;

use crate::{ActionWeights, BehaviorContext, BehaviorError, BehaviorParameters, BehaviorResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BehaviorRecord {
    role:              String,
    context:           String,
    socialize_local:   f64,
    socialize_global:  f64,
    hang_with_friends: f64,
    shopping:          f64,
    nothing:           f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load [`BehaviorParameters`] from a CSV file.
pub fn load_behavior_csv(path: &Path) -> BehaviorResult<BehaviorParameters> {
    let file = std::fs::File::open(path)?;
    load_behavior_reader(file)
}

/// Like [`load_behavior_csv`] but accepts any `Read` source.
pub fn load_behavior_reader<R: Read>(reader: R) -> BehaviorResult<BehaviorParameters> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::with_capacity(9);

    for result in csv_reader.deserialize::<BehaviorRecord>() {
        let row = result.map_err(|e| BehaviorError::Parse(e.to_string()))?;
        let role = RoleKind::parse(&row.role)
            .ok_or_else(|| BehaviorError::Parse(format!("unknown role {:?}", row.role)))?;
        let ctx = BehaviorContext::parse(&row.context)
            .ok_or_else(|| BehaviorError::Parse(format!("unknown context {:?}", row.context)))?;
        let weights = ActionWeights::new([
            row.socialize_local,
            row.socialize_global,
            row.hang_with_friends,
            row.shopping,
            row.nothing,
        ])?;
        entries.push((role, ctx, weights));
    }

    BehaviorParameters::from_entries(entries)
}
