//! Dice rolls: a cryptographic roll source and the roll-to-index codec.
//!
//! Rolls are drawn from [`RandomSource`] and assembled into a
//! [`RollSequence`], which decodes to a position in a wordlist.

mod codec;
mod source;

pub use codec::{roll_to_index, RollError, RollSequence, MAX_ROLLS};
pub use source::{RandomError, RandomSource};

#[cfg(test)]
pub(crate) use source::testing;
