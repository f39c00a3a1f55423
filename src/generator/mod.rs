//! Passphrase and password generation.
//!
//! Both generators take a [`RandomSource`] explicitly. A failed draw ends
//! the call with an error; nothing is retried and no weaker source is
//! substituted.

mod apple;
mod phrase;

pub use apple::{apple_password, APPLE_PASSWORD_LEN};
pub use phrase::{Phrase, PhraseGenerator};

use crate::dice::{RandomError, RandomSource, RollError};
use crate::entropy::{Estimator, Stats, MAX_WORDS};
use crate::wordlist::{Dictionary, WordlistStore};
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Words per phrase when neither a word count nor a bit target is given.
pub const DEFAULT_WORDS: u32 = 5;

/// Errors that end a generation call.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error(transparent)]
    RandomSource(#[from] RandomError),
    #[error("invalid roll sequence: {0}")]
    InvalidRollSequence(#[from] RollError),
    #[error("no word count up to {max_words} reaches {target_bits} bits with the {dictionary} list")]
    UnresolvedWordCount {
        target_bits: u32,
        dictionary: Dictionary,
        max_words: u32,
    },
}

/// Output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Space-separated dicewords.
    #[default]
    Phrase,
    /// `xxxxxx-xxxxxx-xxxxxx` passwords.
    Apple,
}

/// What to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Words per phrase. Takes precedence over `bits`.
    pub words: Option<u32>,
    /// Target entropy used to derive the word count.
    pub bits: Option<u32>,
    /// Number of phrases or passwords.
    pub phrases: u32,
    pub dictionary: Dictionary,
    pub estimator: Estimator,
    pub style: Style,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            words: None,
            bits: None,
            phrases: 5,
            dictionary: Dictionary::Large,
            estimator: Estimator::default(),
            style: Style::Phrase,
        }
    }
}

impl GenerationRequest {
    /// Resolves the number of words per phrase.
    ///
    /// An explicit non-zero word count wins. Otherwise the smallest count
    /// whose estimate reaches `bits` is used, or [`DEFAULT_WORDS`] when no
    /// target is set.
    pub fn word_count(&self) -> Result<u32, GenerationError> {
        if let Some(words) = self.words.filter(|&w| w > 0) {
            return Ok(words);
        }

        match self.bits.filter(|&b| b > 0) {
            None => Ok(DEFAULT_WORDS),
            Some(target_bits) => {
                let words = self
                    .estimator
                    .words_for_bits(f64::from(target_bits), self.dictionary)
                    .ok_or(GenerationError::UnresolvedWordCount {
                        target_bits,
                        dictionary: self.dictionary,
                        max_words: MAX_WORDS,
                    })?;
                tracing::debug!(
                    target_bits,
                    words,
                    dictionary = %self.dictionary,
                    estimator = %self.estimator,
                    "derived word count from bit target"
                );
                Ok(words)
            }
        }
    }
}

/// Generates `request.phrases` dicewords phrases with their stats.
pub fn generate_phrases<R: RngCore + CryptoRng>(
    store: &WordlistStore,
    request: &GenerationRequest,
    source: &mut RandomSource<R>,
) -> Result<Vec<(Phrase, Stats)>, GenerationError> {
    let words = request.word_count()?;
    let generator =
        PhraseGenerator::new(store, request.dictionary).with_estimator(request.estimator);

    let phrases = (0..request.phrases)
        .map(|_| generator.generate(words, source))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        phrases = phrases.len(),
        words,
        dictionary = %request.dictionary,
        "generated phrases"
    );
    Ok(phrases)
}

/// Generates `count` Apple-style passwords with their fixed stats.
pub fn generate_apple_passwords<R: RngCore + CryptoRng>(
    count: u32,
    source: &mut RandomSource<R>,
) -> Result<Vec<(String, Stats)>, GenerationError> {
    let passwords = (0..count)
        .map(|_| apple_password(source).map(|password| (password, Stats::apple())))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(passwords = passwords.len(), "generated apple-style passwords");
    Ok(passwords)
}
