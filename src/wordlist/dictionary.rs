//! Dictionary variants and their per-list constants.

use serde::{Deserialize, Serialize};

/// Constants that describe one dictionary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictionaryParams {
    /// Dice rolls needed to select one word.
    pub rolls_per_word: u32,
    /// Number of entries in the list (6^rolls_per_word).
    pub list_len: usize,
    /// Smallest valid roll sequence (all ones).
    pub min_roll_sequence: u32,
    /// Bits per word used by the linear approximation estimator.
    pub base_bits_per_word: f64,
}

const LARGE: DictionaryParams = DictionaryParams {
    rolls_per_word: 5,
    list_len: 7776,
    min_roll_sequence: 11111,
    base_bits_per_word: 12.9,
};

const SHORT: DictionaryParams = DictionaryParams {
    rolls_per_word: 4,
    list_len: 1296,
    min_roll_sequence: 1111,
    base_bits_per_word: 10.3,
};

/// One of the three EFF wordlists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dictionary {
    /// EFF large list, five rolls per word.
    #[default]
    Large,
    /// EFF short list, four rolls per word.
    Short,
    /// EFF short list with unique three-letter prefixes, four rolls per word.
    #[serde(rename = "short-unique")]
    ShortUniquePrefix,
}

impl Dictionary {
    /// All dictionaries in store order.
    pub const ALL: [Dictionary; 3] = [
        Dictionary::Large,
        Dictionary::Short,
        Dictionary::ShortUniquePrefix,
    ];

    /// Returns the constant table for this dictionary.
    #[inline]
    pub fn params(self) -> &'static DictionaryParams {
        match self {
            Dictionary::Large => &LARGE,
            Dictionary::Short | Dictionary::ShortUniquePrefix => &SHORT,
        }
    }

    #[inline]
    pub fn rolls_per_word(self) -> u32 {
        self.params().rolls_per_word
    }

    #[inline]
    pub fn list_len(self) -> usize {
        self.params().list_len
    }

    /// Distinct words a single draw can produce.
    #[inline]
    pub fn combos_per_word(self) -> u64 {
        self.params().list_len as u64
    }

    /// Short name used in config files and logs.
    pub fn name(self) -> &'static str {
        match self {
            Dictionary::Large => "large",
            Dictionary::Short => "short",
            Dictionary::ShortUniquePrefix => "short-unique",
        }
    }
}

impl std::fmt::Display for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
