//! Benchmark support crate for partree.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks of frontier construction and full solves.

pub mod error;
pub mod params;
pub mod source;
