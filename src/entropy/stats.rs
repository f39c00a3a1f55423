//! Strength summary for generated output.

use super::Estimator;
use crate::wordlist::Dictionary;
use serde::Serialize;

/// Reported figures for one Apple-style password. These are fixed values,
/// not measured from the generated string.
const APPLE_BITS: f64 = 80.0;
const APPLE_LENGTH: usize = 20;

/// Length and entropy figures for one generated phrase or password.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    /// Estimated entropy in bits.
    pub estimated_bits: f64,
    /// Characters including separators.
    pub total_length: usize,
    /// Characters excluding spaces.
    pub non_space_chars: usize,
}

impl Stats {
    /// Computes stats for a space-separated phrase.
    pub fn for_phrase(phrase: &str, dictionary: Dictionary, estimator: Estimator) -> Self {
        let phrase = phrase.trim();
        let (words, non_space_chars) = phrase
            .split(' ')
            .filter(|word| !word.is_empty())
            .fold((0u32, 0usize), |(n, chars), word| {
                (n + 1, chars + word.chars().count())
            });

        Self {
            estimated_bits: estimator.estimate_bits(words, dictionary),
            total_length: phrase.chars().count(),
            non_space_chars,
        }
    }

    /// The fixed figures reported for every Apple-style password.
    pub fn apple() -> Self {
        Self {
            estimated_bits: APPLE_BITS,
            total_length: APPLE_LENGTH,
            non_space_chars: APPLE_LENGTH,
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.1} bits; {} long, {} non space chars",
            self.estimated_bits, self.total_length, self.non_space_chars
        )
    }
}

/// Formats stats as a single human-readable line.
pub fn format_stats(stats: &Stats) -> String {
    stats.to_string()
}
