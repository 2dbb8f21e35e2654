//! CSV location loader.
//!
//! # CSV format
//!
//! One row per location.  Ids must cover `0..n` exactly once, in any order.
//!
//! ```csv
//! location_id,kind,industry_code
//! 0,house,
//! 1,work,
//! 2,school,
//! 3,business,722511
//! 4,gathering,
//! ```
//!
//! **`kind`** is one of `house`, `work`, `school`, `business`, `gathering`.
//! `industry_code` is read only for businesses; a business with no code is
//! not public-facing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use epi_core::LocationId;

use crate::graph::{LocationGraph, LocationGraphBuilder};
use crate::{LocationKind, PlaceError, PlaceResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    location_id:   u32,
    kind:          String,
    industry_code: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`LocationGraph`] from a CSV file.
pub fn load_locations_csv(path: &Path) -> PlaceResult<LocationGraph> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R) -> PlaceResult<LocationGraph> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut slots: Vec<Option<LocationKind>> = Vec::new();

    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| PlaceError::Parse(e.to_string()))?;
        let kind = parse_kind(&row.kind, row.industry_code)?;
        let idx = row.location_id as usize;
        if idx >= slots.len() {
            slots.resize(idx + 1, None);
        }
        if slots[idx].replace(kind).is_some() {
            return Err(PlaceError::Duplicate(LocationId(row.location_id)));
        }
    }

    let mut builder = LocationGraphBuilder::with_capacity(slots.len());
    for (i, slot) in slots.into_iter().enumerate() {
        let kind = slot.ok_or(PlaceError::Gap(LocationId(i as u32)))?;
        builder.add(kind);
    }
    Ok(builder.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(s: &str, industry_code: Option<u32>) -> PlaceResult<LocationKind> {
    match s.trim() {
        "house"     => Ok(LocationKind::House),
        "work"      => Ok(LocationKind::Work),
        "school"    => Ok(LocationKind::School),
        "gathering" => Ok(LocationKind::CommunityGathering),
        "business"  => Ok(match industry_code {
            Some(code) => LocationKind::business(code),
            None       => LocationKind::Business { public_facing: false },
        }),
        other => Err(PlaceError::Parse(format!(
            "invalid location kind {other:?}: expected house, work, school, business, or gathering"
        ))),
    }
}
