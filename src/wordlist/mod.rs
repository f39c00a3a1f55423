//! EFF wordlists and the dictionaries that select them.
//!
//! The store is built once by an explicit load step and then passed by
//! shared reference into generation calls. Nothing mutates it afterwards,
//! so it can be shared across threads without locking.

mod dictionary;
mod store;

pub use dictionary::{Dictionary, DictionaryParams};
pub use store::{sha256_hex, Entry, WordList, WordlistError, WordlistStore};

#[cfg(test)]
pub(crate) use store::fixtures;
