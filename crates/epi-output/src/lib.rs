//! `epi-output`: the statistics and reporting side of a run.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`row`]      | `TransmissionRow`, `DailyStatusRow`, `AgentSnapshotRow`      |
//! | [`summary`]  | `RunSummary` (totals, peak, deaths, recovered cross-tab)     |
//! | [`writer`]   | `OutputWriter` trait                                         |
//! | [`csv`]      | `CsvWriter`                                                  |
//! | [`observer`] | `ModelOutputObserver<W>`: `ModelObserver` → `OutputWriter`  |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, ModelOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"), false)?;
//! let mut obs = ModelOutputObserver::new(writer);
//! model.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{}", obs.summary().unwrap());
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ModelOutputObserver;
pub use row::{AgentSnapshotRow, DailyStatusRow, TransmissionRow};
pub use summary::RunSummary;
pub use writer::OutputWriter;
