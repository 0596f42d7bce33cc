//! Baseline normalization of benchmark timings for relbench.
//!
//! Turns a `dataset::BenchTable` into per-metric comparisons where one library
//! is the baseline (fixed at 1.0) and every other library is expressed as a
//! ratio of the baseline's timing in the same scenario.
//!
//! # Design Principles
//!
//! - **Exact baseline** - The baseline series is 1.0, not `x / x`.
//! - **No silent infinities** - A zero baseline timing is an error.
//! - **Order preserving** - Series and labels keep table order.

mod error;
mod relative;

pub use error::{CompareError, CompareResult};
pub use relative::{normalize, normalize_all, Comparison, RelativeSeries};
