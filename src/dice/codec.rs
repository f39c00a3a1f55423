//! Roll sequence encoding and decoding.
//!
//! A roll sequence is written as a decimal integer whose digits are the
//! die faces in roll order, so the rolls 1, 6, 3, 2, 4 become `16324`.
//! Decoding treats the digits as base-6 with an offset of one, which maps
//! every sequence of `n` rolls onto exactly one index in `[0, 6^n - 1]`.

use crate::wordlist::Dictionary;
use thiserror::Error;

/// Errors produced when a roll sequence cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("roll sequence {rolls} is too short: expected {count} digits (minimum {minimum})")]
    TooShort { rolls: u32, count: u32, minimum: u32 },
    #[error("roll sequence {rolls} has invalid die face {digit}")]
    InvalidDigit { rolls: u32, digit: u32 },
    #[error("roll sequence {rolls} is out of range: index {index} not below {len}")]
    OutOfRange { rolls: u32, index: u64, len: usize },
    #[error("{count} rolls do not fit in one sequence (at most {})", MAX_ROLLS)]
    TooManyRolls { count: usize },
}

/// Longest sequence whose decimal form always fits in a `u32`.
pub const MAX_ROLLS: u32 = 9;

/// A sequence of die faces in its canonical decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollSequence {
    value: u32,
    count: u32,
}

impl RollSequence {
    /// Wraps an encoded value expected to hold `count` rolls.
    ///
    /// No validation happens here; [`RollSequence::to_index`] rejects
    /// malformed values.
    pub fn new(value: u32, count: u32) -> Self {
        Self { value, count }
    }

    /// Assembles die faces into a sequence, first roll most significant.
    pub fn from_rolls(rolls: &[u8]) -> Result<Self, RollError> {
        let too_many = || RollError::TooManyRolls { count: rolls.len() };
        let count = u32::try_from(rolls.len())
            .ok()
            .filter(|&count| count <= MAX_ROLLS)
            .ok_or_else(too_many)?;

        let value = rolls.iter().try_fold(0u32, |acc, &face| {
            acc.checked_mul(10)?.checked_add(u32::from(face))
        });
        Ok(Self {
            value: value.ok_or_else(too_many)?,
            count,
        })
    }

    /// Produces the canonical sequence of `count` rolls for an index.
    ///
    /// Returns `None` when the index does not fit in `count` rolls or
    /// `count` exceeds [`MAX_ROLLS`].
    pub fn from_index(index: usize, count: u32) -> Option<Self> {
        if count > MAX_ROLLS || index >= 6usize.checked_pow(count)? {
            return None;
        }

        let mut remaining = index;
        let mut value = 0u32;
        let mut factor = 1u32;
        for _ in 0..count {
            let face = (remaining % 6) as u32 + 1;
            value += face * factor;
            factor *= 10;
            remaining /= 6;
        }

        Some(Self { value, count })
    }

    /// The encoded decimal value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The number of rolls this sequence is expected to hold.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Smallest encoded value with `count` digits, all ones.
    fn minimum(count: u32) -> u32 {
        (0..count).fold(0u32, |acc, _| acc.saturating_mul(10).saturating_add(1))
    }

    /// Decodes the sequence into a zero-based index into a list of `len` entries.
    ///
    /// Checks run in order: too short, invalid die face, out of range.
    pub fn to_index(&self, len: usize) -> Result<usize, RollError> {
        let minimum = Self::minimum(self.count);
        if self.value < minimum {
            return Err(RollError::TooShort {
                rolls: self.value,
                count: self.count,
                minimum,
            });
        }

        let mut index = 0u64;
        let mut factor = 1u64;
        let mut remaining = self.value;
        while remaining > 0 {
            let digit = remaining % 10;
            if digit == 0 || digit > 6 {
                return Err(RollError::InvalidDigit {
                    rolls: self.value,
                    digit,
                });
            }
            index += factor * u64::from(digit - 1);
            factor *= 6;
            remaining /= 10;
        }

        if index >= len as u64 {
            return Err(RollError::OutOfRange {
                rolls: self.value,
                index,
                len,
            });
        }

        Ok(index as usize)
    }
}

impl std::fmt::Display for RollSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Decodes an encoded roll sequence into an index for the given dictionary.
pub fn roll_to_index(rolls: u32, dictionary: Dictionary) -> Result<usize, RollError> {
    RollSequence::new(rolls, dictionary.rolls_per_word()).to_index(dictionary.list_len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_ones_is_first_index() {
        assert_eq!(roll_to_index(11111, Dictionary::Large), Ok(0));
        assert_eq!(roll_to_index(1111, Dictionary::Short), Ok(0));
        assert_eq!(roll_to_index(1111, Dictionary::ShortUniquePrefix), Ok(0));
    }

    #[test]
    fn test_all_sixes_is_last_index() {
        assert_eq!(roll_to_index(66666, Dictionary::Large), Ok(7775));
        assert_eq!(roll_to_index(6666, Dictionary::Short), Ok(1295));
        assert_eq!(roll_to_index(6666, Dictionary::ShortUniquePrefix), Ok(1295));
    }

    #[test]
    fn test_last_digit_is_least_significant() {
        assert_eq!(roll_to_index(11112, Dictionary::Large), Ok(1));
        assert_eq!(roll_to_index(11121, Dictionary::Large), Ok(6));
        assert_eq!(roll_to_index(21111, Dictionary::Large), Ok(1296));
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(matches!(
            roll_to_index(3, Dictionary::Large),
            Err(RollError::TooShort { minimum: 11111, .. })
        ));
        assert!(matches!(
            roll_to_index(666, Dictionary::Short),
            Err(RollError::TooShort { minimum: 1111, .. })
        ));
    }

    #[test]
    fn test_invalid_digit_rejected() {
        assert_eq!(
            roll_to_index(12734, Dictionary::Large),
            Err(RollError::InvalidDigit {
                rolls: 12734,
                digit: 7
            })
        );
        assert!(matches!(
            roll_to_index(21110, Dictionary::Large),
            Err(RollError::InvalidDigit { digit: 0, .. })
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            roll_to_index(266666, Dictionary::Large),
            Err(RollError::OutOfRange { index: 15551, len: 7776, .. })
        ));
        assert!(matches!(
            roll_to_index(21111, Dictionary::Short),
            Err(RollError::OutOfRange { len: 1296, .. })
        ));
    }

    #[test]
    fn test_error_messages_are_distinguishable() {
        let short = roll_to_index(3, Dictionary::Large).unwrap_err().to_string();
        let digit = roll_to_index(12734, Dictionary::Large).unwrap_err().to_string();
        let range = roll_to_index(266666, Dictionary::Large).unwrap_err().to_string();

        assert!(short.contains("too short"));
        assert!(digit.contains("invalid die face"));
        assert!(range.contains("out of range"));
    }

    #[test]
    fn test_from_rolls_first_roll_most_significant() {
        let seq = RollSequence::from_rolls(&[1, 6, 3, 2, 4]).unwrap();
        assert_eq!(seq.value(), 16324);
        assert_eq!(seq.count(), 5);
    }

    #[test]
    fn test_long_sequences_rejected() {
        let nine = RollSequence::from_rolls(&[6; 9]).unwrap();
        assert_eq!(nine.value(), 666_666_666);
        assert_eq!(
            RollSequence::from_rolls(&[6; 10]),
            Err(RollError::TooManyRolls { count: 10 })
        );
        assert!(RollSequence::from_index(0, 10).is_none());
    }

    #[test]
    fn test_oversized_count_is_too_short() {
        assert!(matches!(
            RollSequence::new(66666, 12).to_index(7776),
            Err(RollError::TooShort {
                minimum: u32::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_from_index_beyond_list() {
        assert!(RollSequence::from_index(1296, 4).is_none());
        assert_eq!(RollSequence::from_index(1295, 4).map(|s| s.value()), Some(6666));
    }

    proptest! {
        #[test]
        fn prop_index_round_trips(index in 0usize..7776) {
            let seq = RollSequence::from_index(index, 5).unwrap();
            prop_assert_eq!(seq.to_index(7776), Ok(index));
        }

        #[test]
        fn prop_valid_rolls_decode_in_range(rolls in proptest::collection::vec(1u8..=6, 4)) {
            let seq = RollSequence::from_rolls(&rolls).unwrap();
            let index = seq.to_index(1296).unwrap();
            prop_assert!(index < 1296);
            prop_assert_eq!(RollSequence::from_index(index, 4), Some(seq));
        }
    }
}
