//! Command line argument parsing for letterbank CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default dictionary file, looked up in the working directory.
pub const DEFAULT_DICTIONARY: &str = "hebrew_words.txt";

/// letterbank - find the dictionary words hidden in a sentence
#[derive(Parser, Debug, Clone)]
#[command(name = "letterbank")]
#[command(about = "Find every dictionary word that can be spelled from the letters of a sentence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LetterbankArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LETTERBANK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LetterbankArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the words that can be spelled from a text
    Generate(GenerateArgs),

    /// Show what a dictionary file contains after validation
    Stats(StatsArgs),

    /// Explain whether one word can be spelled from a text
    Check(CheckArgs),
}

/// Options shared by every command that reads a dictionary.
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Dictionary file, one word per line
    #[arg(
        short,
        long,
        value_name = "DICTIONARY_FILE",
        env = "LETTERBANK_DICTIONARY",
        default_value = DEFAULT_DICTIONARY
    )]
    pub dictionary: PathBuf,

    /// Built-in alphabet to use instead of the configured one (hebrew, latin)
    #[arg(short, long)]
    pub alphabet: Option<String>,
}

/// Arguments for generating matches
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Input text
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Maximum number of words to return (flat mode only)
    #[arg(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Group all matches by word length instead of returning a capped list
    #[arg(short, long)]
    pub grouped: bool,

    /// Filter the dictionary in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Save the results to a timestamped text file
    #[arg(short, long)]
    pub save: bool,

    /// Directory for saved results
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Arguments for checking a single word
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word to check
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Text whose letters the word must come from
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Built-in alphabet to use instead of the configured one (hebrew, latin)
    #[arg(short, long)]
    pub alphabet: Option<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
