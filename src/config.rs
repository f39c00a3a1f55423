//! File-based configuration.
//!
//! Wordlist locations and generation defaults can be kept in a TOML file:
//!
//! ```toml
//! [wordlists]
//! large = "wordlists/eff_large_wordlist.txt"
//!
//! [generation]
//! phrases = 5
//! bits = 64
//! dictionary = "short-unique"
//! estimator = "combinatorial"
//! ```

use crate::entropy::Estimator;
use crate::generator::{GenerationRequest, Style};
use crate::wordlist::Dictionary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("phrase count must be at least 1")]
    InvalidPhraseCount,
    #[error("word count {0} must be at least 1")]
    InvalidWordCount(u32),
    #[error("bit target must be greater than zero")]
    InvalidBitTarget,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Locations of the three EFF wordlist files.
///
/// A pinned SHA-256 digest, when present, must match the file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordlistConfig {
    pub large: PathBuf,
    pub short: PathBuf,
    pub short_unique: PathBuf,
    pub large_sha256: Option<String>,
    pub short_sha256: Option<String>,
    pub short_unique_sha256: Option<String>,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            large: PathBuf::from("wordlists/eff_large_wordlist.txt"),
            short: PathBuf::from("wordlists/eff_short_wordlist_1.txt"),
            short_unique: PathBuf::from("wordlists/eff_short_wordlist_2_0.txt"),
            large_sha256: None,
            short_sha256: None,
            short_unique_sha256: None,
        }
    }
}

impl WordlistConfig {
    /// Resolves relative paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [&mut self.large, &mut self.short, &mut self.short_unique] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    /// Keeps each file name but looks for it in `dir`.
    pub fn in_directory(mut self, dir: &Path) -> Self {
        for path in [&mut self.large, &mut self.short, &mut self.short_unique] {
            if let Some(name) = path.file_name() {
                *path = dir.join(name);
            }
        }
        self
    }
}

/// Generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Phrases (or passwords) per run.
    pub phrases: u32,
    /// Words per phrase. Overrides `bits` when set and is not capped by
    /// the bit-target search limit.
    pub words: Option<u32>,
    /// Target bits used to derive the word count.
    pub bits: u32,
    pub dictionary: Dictionary,
    pub estimator: Estimator,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            phrases: 5,
            words: None,
            bits: 64,
            dictionary: Dictionary::Large,
            estimator: Estimator::Combinatorial,
        }
    }
}

impl GenerationConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrases == 0 {
            return Err(ConfigError::InvalidPhraseCount);
        }
        if let Some(words) = self.words {
            if words == 0 {
                return Err(ConfigError::InvalidWordCount(words));
            }
        }
        if self.bits == 0 {
            return Err(ConfigError::InvalidBitTarget);
        }
        Ok(())
    }

    /// Builds a generation request from these defaults.
    pub fn request(&self, style: Style) -> GenerationRequest {
        GenerationRequest {
            words: self.words,
            bits: Some(self.bits),
            phrases: self.phrases,
            dictionary: self.dictionary,
            estimator: self.estimator,
            style,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Wordlist files. When absent the built-in lists are used if the
    /// crate was built with them, else the default paths.
    #[serde(default)]
    pub wordlists: Option<WordlistConfig>,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Relative wordlist paths are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let mut config = Self::from_toml(&content)?;
        if let Some(dir) = path.parent() {
            config.wordlists = config.wordlists.map(|wordlists| wordlists.relative_to(dir));
        }
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.generation.validate()?;
        Ok(config)
    }
}
