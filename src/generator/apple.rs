//! Apple-style passwords: `xxxxxx-xxxxxx-xxxxxx`.
//!
//! Eighteen random lowercase letters in three hyphenated groups, with one
//! letter capitalized and a different one replaced by a digit.

use crate::dice::{RandomError, RandomSource};
use rand_core::{CryptoRng, RngCore};

const GROUP_LEN: usize = 6;
const GROUPS: usize = 3;
const LETTERS: usize = GROUP_LEN * GROUPS;

/// Length of a generated password including hyphens.
pub const APPLE_PASSWORD_LEN: usize = LETTERS + GROUPS - 1;

/// Generates one Apple-style password.
pub fn apple_password<R: RngCore + CryptoRng>(
    source: &mut RandomSource<R>,
) -> Result<String, RandomError> {
    let mut chars = [0u8; LETTERS];
    for c in chars.iter_mut() {
        *c = b'a' + source.below(26)? as u8;
    }

    let upper_pos = source.below(LETTERS as u32)? as usize;
    chars[upper_pos] = chars[upper_pos].to_ascii_uppercase();

    let digit = source.below(10)? as u8;
    let digit_pos = loop {
        let pos = source.below(LETTERS as u32)? as usize;
        if pos != upper_pos {
            break pos;
        }
    };
    chars[digit_pos] = b'0' + digit;

    tracing::trace!(upper_pos, digit_pos, "built apple-style password");

    let groups: Vec<String> = chars
        .chunks(GROUP_LEN)
        .map(|group| group.iter().map(|&b| char::from(b)).collect())
        .collect();
    Ok(groups.join("-"))
}
