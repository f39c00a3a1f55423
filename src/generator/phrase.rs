//! Dicewords phrase generation.

use super::GenerationError;
use crate::dice::{RandomSource, RollSequence};
use crate::entropy::{Estimator, Stats};
use crate::wordlist::{Dictionary, WordList, WordlistStore};
use rand_core::{CryptoRng, RngCore};

/// Most rolls any dictionary needs per word.
const MAX_ROLLS_PER_WORD: usize = 5;

/// Words joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase(String);

impl Phrase {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the words of the phrase.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Phrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Draws words from one dictionary of a loaded store.
pub struct PhraseGenerator<'a> {
    list: &'a WordList,
    estimator: Estimator,
}

impl<'a> PhraseGenerator<'a> {
    /// Creates a generator for `dictionary` using the default estimator.
    pub fn new(store: &'a WordlistStore, dictionary: Dictionary) -> Self {
        Self {
            list: store.list(dictionary),
            estimator: Estimator::default(),
        }
    }

    /// Uses the given estimator for reported stats.
    pub fn with_estimator(mut self, estimator: Estimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn dictionary(&self) -> Dictionary {
        self.list.dictionary()
    }

    /// Rolls the dice for one word and looks it up.
    pub fn draw_word<R: RngCore + CryptoRng>(
        &self,
        source: &mut RandomSource<R>,
    ) -> Result<&'a str, GenerationError> {
        let count = self.dictionary().rolls_per_word() as usize;
        let mut faces = [0u8; MAX_ROLLS_PER_WORD];
        for face in faces.iter_mut().take(count) {
            *face = source.roll_die()?;
        }

        let rolls = RollSequence::from_rolls(&faces[..count])?;
        let word = self.list.word_for_sequence(rolls)?;
        tracing::trace!(%rolls, word, "drew word");
        Ok(word)
    }

    /// Generates one phrase of `words` words with its stats.
    ///
    /// Any failure ends the whole phrase; no partial phrase is returned.
    pub fn generate<R: RngCore + CryptoRng>(
        &self,
        words: u32,
        source: &mut RandomSource<R>,
    ) -> Result<(Phrase, Stats), GenerationError> {
        let mut drawn = Vec::with_capacity(words as usize);
        for _ in 0..words {
            drawn.push(self.draw_word(source)?);
        }

        let phrase = Phrase(drawn.join(" "));
        let stats = Stats::for_phrase(phrase.as_str(), self.dictionary(), self.estimator);
        Ok((phrase, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::testing::FailingRng;
    use crate::wordlist::fixtures;

    #[test]
    fn test_phrase_word_count() {
        let store = fixtures::store();
        let generator = PhraseGenerator::new(&store, Dictionary::Large);
        let mut source = RandomSource::seeded([3u8; 32]);

        let (phrase, stats) = generator.generate(6, &mut source).unwrap();
        assert_eq!(phrase.word_count(), 6);
        assert!(!phrase.as_str().ends_with(' '));
        assert!(!phrase.as_str().contains("  "));
        assert_eq!(stats.total_length, phrase.as_str().len());
    }

    #[test]
    fn test_rolls_per_word() {
        let store = fixtures::store();
        let mut source = RandomSource::seeded([4u8; 32]);

        PhraseGenerator::new(&store, Dictionary::Large)
            .generate(3, &mut source)
            .unwrap();
        assert_eq!(source.draws(), 15);

        PhraseGenerator::new(&store, Dictionary::ShortUniquePrefix)
            .generate(3, &mut source)
            .unwrap();
        assert_eq!(source.draws(), 27);
    }

    #[test]
    fn test_words_come_from_selected_list() {
        let store = fixtures::store();
        let list = store.list(Dictionary::Short);
        let generator = PhraseGenerator::new(&store, Dictionary::Short);
        let mut source = RandomSource::seeded([5u8; 32]);

        let (phrase, _) = generator.generate(20, &mut source).unwrap();
        for word in phrase.words() {
            assert!(
                list.entries().iter().any(|entry| entry.word == word),
                "{} not in short list",
                word
            );
        }
    }

    #[test]
    fn test_same_seed_same_phrase() {
        let store = fixtures::store();
        let generator = PhraseGenerator::new(&store, Dictionary::Large);

        let (a, _) = generator
            .generate(5, &mut RandomSource::seeded([9u8; 32]))
            .unwrap();
        let (b, _) = generator
            .generate(5, &mut RandomSource::seeded([9u8; 32]))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stats_use_selected_estimator() {
        let store = fixtures::store();
        let generator =
            PhraseGenerator::new(&store, Dictionary::Large).with_estimator(Estimator::Linear);

        let (_, stats) = generator
            .generate(2, &mut RandomSource::seeded([1u8; 32]))
            .unwrap();
        assert_eq!(format!("{:.1}", stats.estimated_bits), "26.2");
    }

    #[test]
    fn test_random_failure_ends_phrase() {
        let store = fixtures::store();
        let generator = PhraseGenerator::new(&store, Dictionary::Large);
        let mut source = RandomSource::new(FailingRng);

        assert!(matches!(
            generator.generate(5, &mut source),
            Err(GenerationError::RandomSource(_))
        ));
    }
}
