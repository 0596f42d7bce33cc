//! Reference timings from the binary-archive serialization benchmark suite.
//!
//! Each scenario round-trips a container through a binary output archive and
//! back. Figures are the reported save and load times for Boost, Cereal and
//! Ser20 on the same machine.

use crate::error::DatasetResult;
use crate::{BenchTable, Scenario};

/// Boost.Serialization.
pub const BOOST: &str = "Boost";
/// Cereal.
pub const CEREAL: &str = "Cereal";
/// Ser20.
pub const SER20: &str = "Ser20";

/// Library used as the denominator in relative charts.
pub const BASELINE: &str = CEREAL;

/// Builds the reference table.
///
/// Scenario order follows the benchmark suite: vectors of primitives, vectors
/// of structs, a single large string, a vector of short strings, then a map.
pub fn ser20_binary() -> DatasetResult<BenchTable> {
    BenchTable::builder()
        .library(BOOST)
        .library(CEREAL)
        .library(SER20)
        .scenario(
            Scenario::new("double")
                .timing(BOOST, 7.63, 2.75)
                .timing(CEREAL, 7.58, 2.74)
                .timing(SER20, 7.59, 2.73),
        )
        .scenario(
            Scenario::new("uint8_t")
                .timing(BOOST, 66.33, 21.42)
                .timing(CEREAL, 66.29, 21.42)
                .timing(SER20, 66.26, 21.41),
        )
        .scenario(
            Scenario::new("PoDStruct")
                .timing(BOOST, 102.78, 82.66)
                .timing(CEREAL, 75.25, 58.57)
                .timing(SER20, 37.79, 32.00),
        )
        .scenario(
            Scenario::new("PoDChild")
                .timing(BOOST, 66.94, 24.19)
                .timing(CEREAL, 68.00, 24.64)
                .timing(SER20, 67.29, 26.27),
        )
        .scenario(
            Scenario::new("String")
                .timing(BOOST, 0.87, 0.71)
                .timing(CEREAL, 0.87, 0.71)
                .timing(SER20, 0.87, 0.72),
        )
        .scenario(
            Scenario::new("Vector(String)")
                .timing(BOOST, 2.10, 3.42)
                .timing(CEREAL, 2.51, 4.07)
                .timing(SER20, 1.36, 3.09),
        )
        .scenario(
            Scenario::new("Map(PoDStruct)")
                .timing(BOOST, 5.93, 9.46)
                .timing(CEREAL, 4.48, 4.58)
                .timing(SER20, 2.14, 3.51),
        )
        .build()
}
