//! Entropy estimation and stats reporting.

mod estimator;
mod stats;

pub use estimator::{estimate_bits, Estimator, MAX_WORDS};
pub use stats::{format_stats, Stats};
