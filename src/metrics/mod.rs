//! Prometheus metrics for generation activity.
//!
//! # Metrics Exposed
//!
//! - `dicewords_phrases_generated_total` - Dicewords phrases generated
//! - `dicewords_words_drawn_total` - Words drawn from wordlists
//! - `dicewords_random_draws_total` - Successful random source draws
//! - `dicewords_apple_passwords_total` - Apple-style passwords generated
//! - `dicewords_generation_failures_total` - Failed generation calls
//! - `dicewords_last_estimated_bits` - Estimate for the most recent output
//!
//! # Example
//!
//! ```
//! use dicewords::metrics::{MetricsRegistry, MetricsSnapshot};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//!
//! let snapshot = MetricsSnapshot {
//!     phrases_generated: 5,
//!     words_drawn: 25,
//!     random_draws: 125,
//!     last_estimated_bits: Some(64.6),
//!     ..Default::default()
//! };
//!
//! registry.update(&snapshot);
//! assert!(registry.encode().unwrap().contains("dicewords_words_drawn_total 25"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
