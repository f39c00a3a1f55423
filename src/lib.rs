//! Dicewords Library
//!
//! Generates memorable passphrases from the EFF dicewords lists and
//! fixed-format Apple-style passwords, and reports how many bits of
//! entropy each one carries.
//!
//! # Architecture
//!
//! ```text
//! random source → dice rolls → roll codec → wordlist lookup → phrase
//!                                                              ↓
//!                                                   entropy estimate / stats
//! ```
//!
//! # Design Principles
//!
//! - **Cryptographic randomness only**: every draw comes from a
//!   `CryptoRng`, and a failed draw is returned as an error
//! - **No modulo bias**: uniform draws use rejection sampling
//! - **Load once, share read-only**: the wordlist store is built by an
//!   explicit load step and passed by reference
//!
//! # Example
//!
//! ```no_run
//! use dicewords::{
//!     dice::RandomSource,
//!     generator::{generate_phrases, GenerationRequest},
//!     wordlist::{Dictionary, WordlistStore},
//! };
//!
//! // Built-in lists, or the default paths under `wordlists/`
//! let store = WordlistStore::open(None).unwrap();
//! let mut source = RandomSource::os();
//!
//! let request = GenerationRequest {
//!     bits: Some(64),
//!     dictionary: Dictionary::Large,
//!     ..Default::default()
//! };
//!
//! for (phrase, stats) in generate_phrases(&store, &request, &mut source).unwrap() {
//!     println!("{}\n    {}", phrase, stats);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod dice;
pub mod entropy;
pub mod generator;
pub mod metrics;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig, GenerationConfig, WordlistConfig};
pub use dice::{roll_to_index, RandomError, RandomSource, RollError, RollSequence};
pub use entropy::{estimate_bits, format_stats, Estimator, Stats};
pub use generator::{
    generate_apple_passwords, generate_phrases, GenerationError, GenerationRequest, Phrase,
    PhraseGenerator, Style,
};
pub use wordlist::{Dictionary, WordList, WordlistError, WordlistStore};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
