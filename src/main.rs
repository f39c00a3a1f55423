//! Dicewords CLI
//!
//! Prints EFF dicewords passphrases or Apple-style passwords, optionally
//! with their entropy stats.

use clap::Parser;
use dicewords::{
    config::{ConfigError, FileConfig},
    dice::RandomSource,
    entropy::{Estimator, Stats},
    generator::{generate_apple_passwords, generate_phrases, GenerationError, Style},
    metrics::{MetricsRegistry, MetricsSnapshot},
    wordlist::{Dictionary, WordlistError, WordlistStore},
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Print EFF dicewords.
#[derive(Debug, Parser)]
#[command(name = "dicewords", version, about)]
struct Args {
    /// Number of passphrases to generate [default: 5]
    #[arg(short = 'p', long = "phrases")]
    phrases: Option<u32>,

    /// Number of words per passphrase. Overrides --bits
    #[arg(short = 'w', long = "words")]
    words: Option<u32>,

    /// Target number of bits [default: 64]
    #[arg(short = 'b', long = "bits")]
    bits: Option<u32>,

    /// Use the EFF short words list
    #[arg(long, conflicts_with = "short2")]
    short: bool,

    /// Use the EFF short list with unique three-letter beginnings
    #[arg(long)]
    short2: bool,

    /// Generate Apple-style passwords instead of passphrases
    #[arg(long)]
    apple: bool,

    /// Print stats under each line
    #[arg(short, long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Entropy estimator: combinatorial or linear
    #[arg(long)]
    estimator: Option<Estimator>,

    /// Directory holding the wordlist files
    #[arg(long)]
    wordlist_dir: Option<PathBuf>,

    /// Write Prometheus metrics to stderr after the run
    #[arg(long)]
    metrics: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

fn main() {
    // Logs go to stderr so stdout carries only generated output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    info!("Dicewords v{}", dicewords::VERSION);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let mut source = RandomSource::os();
    let mut snapshot = MetricsSnapshot::default();
    let outcome = run(&args, &config, &mut source, &mut snapshot);
    snapshot.random_draws = source.draws();

    if args.metrics {
        report_metrics(&snapshot);
    }

    match outcome {
        Ok(lines) => {
            for (line, stats) in lines {
                println!("{}", line);
                if args.verbose {
                    println!("    {}", stats);
                }
            }
        }
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Merges the config file (if any) with command-line overrides.
fn load_config(args: &Args) -> Result<FileConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let generation = &mut config.generation;
    if let Some(phrases) = args.phrases {
        generation.phrases = phrases;
    }
    if let Some(words) = args.words {
        // 0 means "derive from bits", as in the config file
        generation.words = Some(words).filter(|&w| w > 0);
    }
    if let Some(bits) = args.bits {
        generation.bits = bits;
    }
    if args.short {
        generation.dictionary = Dictionary::Short;
    } else if args.short2 {
        generation.dictionary = Dictionary::ShortUniquePrefix;
    }
    if let Some(estimator) = args.estimator {
        generation.estimator = estimator;
    }
    generation.validate()?;

    if let Some(dir) = &args.wordlist_dir {
        config.wordlists = Some(config.wordlists.unwrap_or_default().in_directory(dir));
    }

    Ok(config)
}

fn run(
    args: &Args,
    config: &FileConfig,
    source: &mut RandomSource<rand_core::OsRng>,
    snapshot: &mut MetricsSnapshot,
) -> Result<Vec<(String, Stats)>, CliError> {
    let style = if args.apple { Style::Apple } else { Style::Phrase };
    let request = config.generation.request(style);

    let result = match request.style {
        Style::Apple => generate_apple_passwords(request.phrases, source).map(|passwords| {
            snapshot.apple_passwords = passwords.len() as u64;
            passwords
        }),
        Style::Phrase => {
            let store = WordlistStore::open(config.wordlists.as_ref())?;
            generate_phrases(&store, &request, source).map(|phrases| {
                snapshot.phrases_generated = phrases.len() as u64;
                snapshot.words_drawn = phrases
                    .iter()
                    .map(|(phrase, _)| phrase.word_count() as u64)
                    .sum();
                phrases
                    .into_iter()
                    .map(|(phrase, stats)| (phrase.into_string(), stats))
                    .collect()
            })
        }
    };

    match result {
        Ok(lines) => {
            snapshot.last_estimated_bits = lines.last().map(|(_, stats)| stats.estimated_bits);
            Ok(lines)
        }
        Err(e) => {
            snapshot.generation_failures += 1;
            Err(e.into())
        }
    }
}

fn report_metrics(snapshot: &MetricsSnapshot) {
    let encoded = MetricsRegistry::new().and_then(|registry| {
        registry.update(snapshot);
        registry.encode()
    });

    match encoded {
        Ok(text) => eprint!("{}", text),
        Err(e) => warn!("Failed to encode metrics: {}", e),
    }
}
