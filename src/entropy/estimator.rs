//! Passphrase entropy estimators.
//!
//! Two estimators are available and they do not agree exactly:
//!
//! - [`Estimator::Combinatorial`] counts the possible phrases, giving
//!   `log2(combos ^ words)`. For the large list that is about 12.925 bits
//!   per word.
//! - [`Estimator::Linear`] uses a rounded per-word figure plus a constant,
//!   `base * words + 0.4`, with 12.9 bits (large) or 10.3 bits (short).
//!
//! Combinatorial is the default. Linear is kept so that figures quoted by
//! older releases can still be reproduced.

use crate::wordlist::Dictionary;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest word count considered when searching for a bit target.
pub const MAX_WORDS: u32 = 20;

/// Constant added by the linear approximation.
const LINEAR_OFFSET_BITS: f64 = 0.4;

/// Method used to estimate phrase entropy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estimator {
    /// `log2(combos_per_word ^ words)`.
    #[default]
    Combinatorial,
    /// `base_bits_per_word * words + 0.4`.
    Linear,
}

impl Estimator {
    /// Estimated bits for a phrase of `words` words drawn from `dictionary`.
    pub fn estimate_bits(self, words: u32, dictionary: Dictionary) -> f64 {
        match self {
            // Summed per word rather than exponentiated, which overflows f64
            // long before any word count we would generate.
            Estimator::Combinatorial => {
                f64::from(words) * (dictionary.combos_per_word() as f64).log2()
            }
            Estimator::Linear => {
                dictionary.params().base_bits_per_word * f64::from(words) + LINEAR_OFFSET_BITS
            }
        }
    }

    /// Smallest word count whose estimate reaches `target_bits`.
    ///
    /// Searches `1..=MAX_WORDS` and returns `None` if no count qualifies.
    pub fn words_for_bits(self, target_bits: f64, dictionary: Dictionary) -> Option<u32> {
        (1..=MAX_WORDS).find(|&words| self.estimate_bits(words, dictionary) >= target_bits)
    }

    pub fn name(self) -> &'static str {
        match self {
            Estimator::Combinatorial => "combinatorial",
            Estimator::Linear => "linear",
        }
    }
}

impl std::fmt::Display for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Estimator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "combinatorial" => Ok(Estimator::Combinatorial),
            "linear" => Ok(Estimator::Linear),
            other => Err(format!(
                "unknown estimator {:?} (expected combinatorial or linear)",
                other
            )),
        }
    }
}

/// Estimated bits using the default estimator.
pub fn estimate_bits(words: u32, dictionary: Dictionary) -> f64 {
    Estimator::default().estimate_bits(words, dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn one_decimal(bits: f64) -> String {
        format!("{:.1}", bits)
    }

    #[test]
    fn test_combinatorial_golden_values() {
        let est = Estimator::Combinatorial;
        assert_eq!(one_decimal(est.estimate_bits(2, Dictionary::Large)), "25.8");
        assert_eq!(one_decimal(est.estimate_bits(2, Dictionary::Short)), "20.7");
        assert_eq!(one_decimal(est.estimate_bits(5, Dictionary::Large)), "64.6");
        assert_eq!(
            one_decimal(est.estimate_bits(10, Dictionary::ShortUniquePrefix)),
            "103.4"
        );
    }

    #[test]
    fn test_combinatorial_matches_power_form() {
        for dict in Dictionary::ALL {
            for words in 1..=10 {
                let direct = (dict.combos_per_word() as f64).powi(words as i32).log2();
                let est = Estimator::Combinatorial.estimate_bits(words, dict);
                assert!((direct - est).abs() < 1e-9, "{} words {}", dict, words);
            }
        }
    }

    #[test]
    fn test_linear_golden_values() {
        let est = Estimator::Linear;
        assert_eq!(one_decimal(est.estimate_bits(2, Dictionary::Large)), "26.2");
        assert_eq!(one_decimal(est.estimate_bits(2, Dictionary::Short)), "21.0");
        assert_eq!(
            one_decimal(est.estimate_bits(2, Dictionary::ShortUniquePrefix)),
            "21.0"
        );
        assert_eq!(one_decimal(est.estimate_bits(5, Dictionary::Large)), "64.9");
    }

    #[test]
    fn test_default_is_combinatorial() {
        assert_eq!(Estimator::default(), Estimator::Combinatorial);
        assert_eq!(
            estimate_bits(3, Dictionary::Large),
            Estimator::Combinatorial.estimate_bits(3, Dictionary::Large)
        );
    }

    #[test]
    fn test_words_for_120_bits() {
        for est in [Estimator::Combinatorial, Estimator::Linear] {
            assert_eq!(est.words_for_bits(120.0, Dictionary::Large), Some(10));
            assert_eq!(est.words_for_bits(120.0, Dictionary::Short), Some(12));
        }
    }

    #[test]
    fn test_words_for_bits_is_minimal() {
        for est in [Estimator::Combinatorial, Estimator::Linear] {
            for dict in Dictionary::ALL {
                let words = est.words_for_bits(64.0, dict).unwrap();
                assert!(est.estimate_bits(words, dict) >= 64.0);
                assert!(words == 1 || est.estimate_bits(words - 1, dict) < 64.0);
            }
        }
    }

    #[test]
    fn test_words_for_bits_gives_up() {
        // 20 large words is about 258.5 bits.
        assert_eq!(
            Estimator::Combinatorial.words_for_bits(300.0, Dictionary::Large),
            None
        );
        assert_eq!(
            Estimator::Combinatorial.words_for_bits(258.0, Dictionary::Large),
            Some(20)
        );
    }

    #[test]
    fn test_parse_estimator() {
        assert_eq!("linear".parse::<Estimator>(), Ok(Estimator::Linear));
        assert_eq!(
            "Combinatorial".parse::<Estimator>(),
            Ok(Estimator::Combinatorial)
        );
        assert!("log".parse::<Estimator>().is_err());
    }

    proptest! {
        #[test]
        fn prop_estimates_increase_with_words(words in 1u32..200, linear in any::<bool>()) {
            let est = if linear { Estimator::Linear } else { Estimator::Combinatorial };
            for dict in Dictionary::ALL {
                prop_assert!(est.estimate_bits(words + 1, dict) > est.estimate_bits(words, dict));
            }
        }
    }
}
