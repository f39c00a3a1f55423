//! Metrics collection and registry.

use prometheus::{Encoder, Gauge, IntCounter, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Running totals of generation activity.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Dicewords phrases produced.
    pub phrases_generated: u64,
    /// Words drawn across all phrases.
    pub words_drawn: u64,
    /// Successful draws from the random source.
    pub random_draws: u64,
    /// Apple-style passwords produced.
    pub apple_passwords: u64,
    /// Generation calls that ended in an error.
    pub generation_failures: u64,
    /// Estimate for the most recent output, if any.
    pub last_estimated_bits: Option<f64>,
}

/// Prometheus metrics registry for passphrase generation.
pub struct MetricsRegistry {
    registry: Registry,

    phrases_generated_total: IntCounter,
    words_drawn_total: IntCounter,
    random_draws_total: IntCounter,
    apple_passwords_total: IntCounter,
    generation_failures_total: IntCounter,
    last_estimated_bits: Gauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all generation metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let phrases_generated_total = IntCounter::new(
            "dicewords_phrases_generated_total",
            "Total dicewords phrases generated",
        )?;
        let words_drawn_total = IntCounter::new(
            "dicewords_words_drawn_total",
            "Total words drawn from wordlists",
        )?;
        let random_draws_total = IntCounter::new(
            "dicewords_random_draws_total",
            "Total successful draws from the random source",
        )?;
        let apple_passwords_total = IntCounter::new(
            "dicewords_apple_passwords_total",
            "Total Apple-style passwords generated",
        )?;
        let generation_failures_total = IntCounter::new(
            "dicewords_generation_failures_total",
            "Total generation calls that failed",
        )?;
        let last_estimated_bits = Gauge::new(
            "dicewords_last_estimated_bits",
            "Estimated entropy in bits of the most recent output",
        )?;

        registry.register(Box::new(phrases_generated_total.clone()))?;
        registry.register(Box::new(words_drawn_total.clone()))?;
        registry.register(Box::new(random_draws_total.clone()))?;
        registry.register(Box::new(apple_passwords_total.clone()))?;
        registry.register(Box::new(generation_failures_total.clone()))?;
        registry.register(Box::new(last_estimated_bits.clone()))?;

        Ok(Self {
            registry,
            phrases_generated_total,
            words_drawn_total,
            random_draws_total,
            apple_passwords_total,
            generation_failures_total,
            last_estimated_bits,
        })
    }

    /// Updates all metrics from a snapshot of running totals.
    ///
    /// Counters only move forward by the difference from their current value.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        advance(&self.phrases_generated_total, snapshot.phrases_generated);
        advance(&self.words_drawn_total, snapshot.words_drawn);
        advance(&self.random_draws_total, snapshot.random_draws);
        advance(&self.apple_passwords_total, snapshot.apple_passwords);
        advance(&self.generation_failures_total, snapshot.generation_failures);

        if let Some(bits) = snapshot.last_estimated_bits {
            self.last_estimated_bits.set(bits);
        }
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}
