//! Benchmark timing tables for relbench.
//!
//! This crate defines the data that relative-performance charts are drawn from:
//! - Libraries and the two timed metrics (save, load)
//! - Scenarios holding one timing pair per library
//! - Validated, immutable tables
//! - The reference serialization benchmark figures
//!
//! # Design Principles
//!
//! - **Validated once** - A `BenchTable` that exists is internally consistent.
//! - **No silent overwrites** - Duplicate scenarios and timings are errors.
//! - **Order preserving** - Declaration order is chart order.

mod error;
mod metric;
pub mod reference;
mod table;

pub use error::{DatasetError, DatasetResult};
pub use metric::{Library, Metric, ParseMetricError, Timing};
pub use table::{BenchTable, Scenario, TableBuilder};
