//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bank::LetterBank;
use crate::cli::args::{LetterbankArgs, OutputFormat};
use crate::dictionary::LoadReport;
use crate::engine::{MatchOutcome, WordGroup};
use crate::error::Result;

/// Types that know how to print themselves for a person.
pub trait HumanOutput {
    fn print_human(&self, args: &LetterbankArgs);
}

/// Result structure for the generate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResult {
    pub letters: String,
    pub letter_count: usize,
    pub bank: LetterBank,
    pub alphabet: String,
    pub outcome: MatchOutcome,
    pub total_matches: usize,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<WordGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub alphabet: String,
    #[serde(flatten)]
    pub report: LoadReport,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub word: String,
    pub letters: String,
    pub valid: bool,
    pub missing: BTreeMap<String, usize>,
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &LetterbankArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LetterbankArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl GenerateResult {
    /// The first line of human output, one phrasing per outcome.
    pub fn headline(&self) -> String {
        match self.outcome {
            MatchOutcome::NoUsableLetters => format!(
                "No usable letters in the input. Please enter text written in the {} alphabet.",
                self.alphabet
            ),
            MatchOutcome::NoMatches => {
                "No dictionary word can be spelled from the letters given.".to_string()
            }
            MatchOutcome::Matches => format!(
                "Found {} valid words in the text:",
                format_count(self.total_matches)
            ),
        }
    }
}

impl HumanOutput for GenerateResult {
    fn print_human(&self, args: &LetterbankArgs) {
        if args.verbosity() > 1 {
            println!("Letters: {} ({})", self.letters, self.letter_count);
        }

        println!("{}", self.headline());
        if self.outcome == MatchOutcome::Matches {
            if let Some(words) = &self.words {
                println!("{}", words.join(", "));
                if self.truncated {
                    println!("(showing the first {} of {})", words.len(), self.total_matches);
                }
            }
            if let Some(groups) = &self.groups {
                for group in groups {
                    println!();
                    println!("{} letters ({} words)", group.length, group.words.len());
                    println!("{}", group.words.join(", "));
                }
            }
        }

        if let Some(path) = &self.saved_to {
            println!();
            println!("Results saved to: {path}");
        }
    }
}

impl HumanOutput for DictionaryStats {
    fn print_human(&self, args: &LetterbankArgs) {
        println!("Dictionary: {}", self.path);
        println!("══════════");
        if !self.report.source_found {
            println!("  File not found; searches will use an empty dictionary.");
            return;
        }
        println!("  Alphabet:   {}", self.alphabet);
        println!("  Words:      {}", format_count(self.report.accepted));
        println!("  Duplicates: {}", format_count(self.report.duplicates));
        println!("  Rejected:   {}", format_count(self.report.rejected));
        if args.verbosity() > 1 {
            println!("  Blank:      {}", format_count(self.report.blank));
        }
    }
}

impl HumanOutput for CheckResult {
    fn print_human(&self, _args: &LetterbankArgs) {
        if self.valid {
            println!("'{}' can be spelled from '{}'.", self.word, self.letters);
        } else {
            let missing: Vec<String> = self
                .missing
                .iter()
                .map(|(letter, count)| format!("{letter} x{count}"))
                .collect();
            println!(
                "'{}' cannot be spelled from '{}'. Missing: {}",
                self.word,
                self.letters,
                missing.join(", ")
            );
        }
    }
}

/// Format a count with thousands separators.
fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
