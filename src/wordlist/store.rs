//! Wordlist parsing, validation and lookup.
//!
//! Each list is a sequence of `rollKey<TAB>word` rows. Row `i` must carry
//! the roll sequence that decodes to index `i`, which the loader checks so
//! that a lookup by rolls can go straight to the row by position.

use super::Dictionary;
use crate::config::WordlistConfig;
use crate::dice::{RollError, RollSequence};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a wordlist.
#[derive(Debug, Clone, Error)]
pub enum WordlistError {
    #[error("failed to read {dictionary} wordlist {path}: {message}")]
    Io {
        dictionary: Dictionary,
        path: PathBuf,
        message: String,
    },
    #[error("{dictionary} wordlist line {line}: {reason}")]
    MalformedRow {
        dictionary: Dictionary,
        line: usize,
        reason: String,
    },
    #[error("{dictionary} wordlist has {found} rows, expected {expected}")]
    WrongLength {
        dictionary: Dictionary,
        expected: usize,
        found: usize,
    },
    #[error("{dictionary} wordlist line {line}: roll key {found} out of order, expected {expected}")]
    RowOutOfOrder {
        dictionary: Dictionary,
        line: usize,
        found: u32,
        expected: u32,
    },
    #[error("{dictionary} wordlist digest mismatch: expected {expected}, got {found}")]
    DigestMismatch {
        dictionary: Dictionary,
        expected: String,
        found: String,
    },
}

/// One row of a wordlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Roll sequence that selects this word.
    pub roll_key: RollSequence,
    pub word: String,
}

/// An immutable, validated wordlist for one dictionary.
#[derive(Debug, Clone)]
pub struct WordList {
    dictionary: Dictionary,
    entries: Vec<Entry>,
}

impl WordList {
    /// Parses the `rollKey<TAB>word` text of a wordlist.
    ///
    /// Blank lines before and after the rows are stripped, as is a single
    /// header line without a tab separator.
    pub fn parse(dictionary: Dictionary, raw: &str) -> Result<Self, WordlistError> {
        let lines: Vec<(usize, &str)> = raw
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .collect();

        let mut rows = strip_blank(&lines);
        if let Some((line_no, first)) = rows.first() {
            if !first.contains('\t') {
                tracing::debug!(%dictionary, line = line_no, "skipping wordlist header");
                rows = strip_blank(&rows[1..]);
            }
        }

        let params = dictionary.params();
        if rows.len() != params.list_len {
            return Err(WordlistError::WrongLength {
                dictionary,
                expected: params.list_len,
                found: rows.len(),
            });
        }

        let mut entries = Vec::with_capacity(rows.len());
        for (index, &(line, row)) in rows.iter().enumerate() {
            // Fields past the second are ignored.
            let mut fields = row.split('\t');
            let (key, word) = match (fields.next(), fields.next()) {
                (Some(key), Some(word)) => (key, word),
                _ => {
                    return Err(WordlistError::MalformedRow {
                        dictionary,
                        line,
                        reason: "missing tab separator".to_string(),
                    })
                }
            };

            let key: u32 = key.trim().parse().map_err(|_| WordlistError::MalformedRow {
                dictionary,
                line,
                reason: format!("roll key {:?} is not a number", key),
            })?;

            let word = word.trim();
            if word.is_empty() {
                return Err(WordlistError::MalformedRow {
                    dictionary,
                    line,
                    reason: "empty word".to_string(),
                });
            }

            let roll_key = RollSequence::new(key, params.rolls_per_word);
            if roll_key.to_index(params.list_len).ok() != Some(index) {
                let expected = RollSequence::from_index(index, params.rolls_per_word)
                    .map_or(0, |seq| seq.value());
                return Err(WordlistError::RowOutOfOrder {
                    dictionary,
                    line,
                    found: key,
                    expected,
                });
            }

            entries.push(Entry {
                roll_key,
                word: word.to_string(),
            });
        }

        Ok(Self {
            dictionary,
            entries,
        })
    }

    /// Looks up the word selected by an encoded roll sequence.
    pub fn word_for_rolls(&self, rolls: u32) -> Result<&str, RollError> {
        self.word_for_sequence(RollSequence::new(rolls, self.dictionary.rolls_per_word()))
    }

    /// Looks up the word selected by a roll sequence.
    pub fn word_for_sequence(&self, rolls: RollSequence) -> Result<&str, RollError> {
        let index = rolls.to_index(self.entries.len())?;
        Ok(&self.entries[index].word)
    }

    /// Returns the word at a zero-based position.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.word.as_str())
    }

    pub fn dictionary(&self) -> Dictionary {
        self.dictionary
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three EFF wordlists, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct WordlistStore {
    large: WordList,
    short: WordList,
    short_unique: WordList,
}

impl WordlistStore {
    /// Builds a store from the raw text of each list.
    pub fn from_sources(large: &str, short: &str, short_unique: &str) -> Result<Self, WordlistError> {
        Ok(Self {
            large: WordList::parse(Dictionary::Large, large)?,
            short: WordList::parse(Dictionary::Short, short)?,
            short_unique: WordList::parse(Dictionary::ShortUniquePrefix, short_unique)?,
        })
    }

    /// Reads, verifies and parses the wordlist files named in the config.
    pub fn load(config: &WordlistConfig) -> Result<Self, WordlistError> {
        Ok(Self {
            large: load_list(Dictionary::Large, &config.large, config.large_sha256.as_deref())?,
            short: load_list(Dictionary::Short, &config.short, config.short_sha256.as_deref())?,
            short_unique: load_list(
                Dictionary::ShortUniquePrefix,
                &config.short_unique,
                config.short_unique_sha256.as_deref(),
            )?,
        })
    }

    /// Parses the EFF lists compiled into the binary.
    #[cfg(feature = "embedded-wordlists")]
    pub fn embedded() -> Result<Self, WordlistError> {
        let store = Self::from_sources(
            embedded::LARGE,
            embedded::SHORT,
            embedded::SHORT_UNIQUE,
        )?;
        tracing::debug!("Loaded built-in wordlists");
        Ok(store)
    }

    /// Opens the configured wordlist files, or the built-in lists when no
    /// files are configured and the crate carries them.
    pub fn open(config: Option<&WordlistConfig>) -> Result<Self, WordlistError> {
        match config {
            Some(config) => Self::load(config),
            #[cfg(feature = "embedded-wordlists")]
            None => Self::embedded(),
            #[cfg(not(feature = "embedded-wordlists"))]
            None => Self::load(&WordlistConfig::default()),
        }
    }

    /// Returns the list backing a dictionary.
    pub fn list(&self, dictionary: Dictionary) -> &WordList {
        match dictionary {
            Dictionary::Large => &self.large,
            Dictionary::Short => &self.short,
            Dictionary::ShortUniquePrefix => &self.short_unique,
        }
    }

    /// Word for a five-roll sequence in the large list.
    pub fn large_word(&self, rolls: u32) -> Result<&str, RollError> {
        self.large.word_for_rolls(rolls)
    }

    /// Word for a four-roll sequence in the short list.
    pub fn short_word(&self, rolls: u32) -> Result<&str, RollError> {
        self.short.word_for_rolls(rolls)
    }

    /// Word for a four-roll sequence in the unique-prefix short list.
    pub fn short_unique_word(&self, rolls: u32) -> Result<&str, RollError> {
        self.short_unique.word_for_rolls(rolls)
    }
}

#[cfg(feature = "embedded-wordlists")]
mod embedded {
    pub(super) const LARGE: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/eff_large_wordlist.txt"));
    pub(super) const SHORT: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/eff_short_wordlist_1.txt"));
    pub(super) const SHORT_UNIQUE: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/eff_short_wordlist_2_0.txt"));
}

/// Drops blank lines from both ends.
fn strip_blank<'a>(lines: &'a [(usize, &'a str)]) -> &'a [(usize, &'a str)] {
    let start = lines
        .iter()
        .position(|(_, line)| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|(_, line)| !line.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

/// Lowercase hex SHA-256 of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn load_list(
    dictionary: Dictionary,
    path: &Path,
    pinned_sha256: Option<&str>,
) -> Result<WordList, WordlistError> {
    let raw = std::fs::read_to_string(path).map_err(|e| WordlistError::Io {
        dictionary,
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let digest = sha256_hex(raw.as_bytes());
    if let Some(expected) = pinned_sha256 {
        if !expected.trim().eq_ignore_ascii_case(&digest) {
            return Err(WordlistError::DigestMismatch {
                dictionary,
                expected: expected.trim().to_ascii_lowercase(),
                found: digest,
            });
        }
    }

    let list = WordList::parse(dictionary, &raw)?;
    tracing::info!(
        %dictionary,
        path = %path.display(),
        words = list.len(),
        sha256 = %digest,
        "Loaded wordlist"
    );
    Ok(list)
}
