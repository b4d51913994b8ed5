//! Command implementations for letterbank CLI.

use std::sync::Arc;

use chrono::Local;
use log::debug;

use crate::alphabet::Alphabet;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::Dictionary;
use crate::engine::{AnagramEngine, EngineConfig, MatchRequest, Matches};
use crate::error::{LetterbankError, Result};
use crate::export::Exporter;
use crate::matcher::deficit;

/// Execute a CLI command.
pub fn execute_command(args: LetterbankArgs) -> Result<()> {
    match &args.command {
        Command::Generate(generate_args) => generate(generate_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Check(check_args) => check_word(check_args.clone(), &args),
    }
}

/// Load the engine configuration and apply the command line overrides.
fn load_config(cli_args: &LetterbankArgs, alphabet: Option<&str>) -> Result<EngineConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };

    if let Some(name) = alphabet {
        let alphabet = Alphabet::builtin(name).ok_or_else(|| {
            LetterbankError::invalid_config(format!(
                "unknown alphabet '{name}' (expected hebrew or latin)"
            ))
        })?;
        config.alphabet = alphabet;
    }

    Ok(config)
}

/// Find and print the words spelled by the input text.
fn generate(args: GenerateArgs, cli_args: &LetterbankArgs) -> Result<()> {
    let result = run_generate(args, cli_args)?;
    output_result(&result, cli_args)
}

/// Run a search and, when asked, save its results.
fn run_generate(args: GenerateArgs, cli_args: &LetterbankArgs) -> Result<GenerateResult> {
    let mut config = load_config(cli_args, args.dictionary.alphabet.as_deref())?;
    if args.parallel {
        config.parallel = true;
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    let limit = config.limit;

    let dictionary = Dictionary::load(&args.dictionary.dictionary, &config.alphabet)?;
    let engine = AnagramEngine::new(Arc::new(dictionary), config)?;

    let request = if args.grouped {
        MatchRequest::grouped(args.text)
    } else {
        MatchRequest::flat(args.text, limit)
    };
    let response = engine.search(&request);
    let outcome = response.outcome();
    let truncated = response.is_truncated();

    // Saving happens only after the search has completed, and only when there is something to save.
    let exporter = Exporter::new(&args.output_dir);
    let now = Local::now();
    let (words, groups, saved_to) = match response.matches {
        Matches::Flat(words) => {
            let saved = if args.save && !words.is_empty() {
                Some(exporter.export_flat(&words, &now)?)
            } else {
                None
            };
            (Some(words), None, saved)
        }
        Matches::Grouped(groups) => {
            let saved = if args.save && !groups.is_empty() {
                Some(exporter.export_grouped(&groups, &now)?)
            } else {
                None
            };
            (None, Some(groups.to_groups()), saved)
        }
    };

    Ok(GenerateResult {
        letter_count: response.bank.total(),
        letters: response.letters,
        bank: response.bank,
        alphabet: engine.config().alphabet.name().to_string(),
        outcome,
        total_matches: response.total_matches,
        truncated,
        words,
        groups,
        saved_to: saved_to.map(|p| p.to_string_lossy().to_string()),
    })
}

/// Load a dictionary file and report what was kept.
fn show_stats(args: StatsArgs, cli_args: &LetterbankArgs) -> Result<()> {
    let config = load_config(cli_args, args.dictionary.alphabet.as_deref())?;
    let (_, report) = Dictionary::load_with_report(&args.dictionary.dictionary, &config.alphabet)?;

    output_result(
        &DictionaryStats {
            path: args.dictionary.dictionary.to_string_lossy().to_string(),
            alphabet: config.alphabet.name().to_string(),
            report,
        },
        cli_args,
    )
}

/// Check a single word against the letters of a text.
fn check_word(args: CheckArgs, cli_args: &LetterbankArgs) -> Result<()> {
    let config = load_config(cli_args, args.alphabet.as_deref())?;
    let engine = AnagramEngine::new(Arc::new(Dictionary::new()), config)?;

    let (letters, bank) = engine.letter_bank(&args.text);
    let missing = deficit(&args.word, &bank);

    output_result(
        &CheckResult {
            word: args.word,
            letters,
            valid: missing.is_empty(),
            missing: missing.iter().map(|(c, n)| (c.to_string(), n)).collect(),
        },
        cli_args,
    )
}
