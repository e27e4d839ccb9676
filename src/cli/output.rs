//! Output formatting for CLI commands.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellerArgs};
use crate::error::Result;
use crate::spelling::{Correction, Timings};

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Path of the checked text.
    pub text: String,
    /// Path of the dictionary used.
    pub dictionary: String,
    /// Substitutions in text order.
    pub corrections: Vec<Correction>,
    /// Number of misspelled words.
    pub words_misspelled: usize,
    /// Number of dictionary entries.
    pub words_in_dictionary: usize,
    /// Number of word runs in the text.
    pub words_in_text: usize,
    /// Time spent in each phase.
    pub timings: Timings,
    /// Whether the text file was rewritten.
    pub rewritten: bool,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// The queried word.
    pub word: String,
    /// Whether the word is already in the dictionary.
    pub correct: bool,
    /// The best dictionary match.
    pub suggestion: String,
    /// Edit distance to the match.
    pub distance: usize,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    /// First word.
    pub source: String,
    /// Second word.
    pub target: String,
    /// Edit distance between them.
    pub distance: usize,
}

/// Output a command result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SpellerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output a check summary. Human output follows the classic speller report.
pub fn output_check_summary(summary: &CheckSummary, args: &SpellerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_check_summary(summary));
            Ok(())
        }
        OutputFormat::Json => output_json(summary, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SpellerArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    match serde_json::to_value(result)? {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(&val);
                println!("{key}: {formatted_val}");
            }
        }
        value => println!("{}", format_value(&value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_check_summary(summary: &CheckSummary) -> String {
    let mut out = String::from("\nCORRECTED WORDS\n\n");
    for correction in &summary.corrections {
        out.push_str(&format!(
            "{} -> {}\n",
            correction.original, correction.replacement
        ));
    }

    let timings = &summary.timings;
    out.push_str(&format!(
        "\nWORDS MISSPELLED:     {}\n",
        summary.words_misspelled
    ));
    out.push_str(&format!(
        "WORDS IN DICTIONARY:  {}\n",
        summary.words_in_dictionary
    ));
    out.push_str(&format!("WORDS IN TEXT:        {}\n", summary.words_in_text));
    out.push_str(&format!(
        "TIME IN load:         {}\n",
        format_seconds(timings.load)
    ));
    out.push_str(&format!(
        "TIME IN check:        {}\n",
        format_seconds(timings.check)
    ));
    out.push_str(&format!(
        "TIME IN size:         {}\n",
        format_seconds(timings.size)
    ));
    out.push_str(&format!(
        "TIME IN unload:       {}\n",
        format_seconds(timings.unload)
    ));
    out.push_str(&format!(
        "TIME IN TOTAL:        {}\n\n",
        format_seconds(timings.total())
    ));
    out
}

fn format_seconds(duration: Duration) -> String {
    format!("{:.2}", duration.as_secs_f64())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        _ => value.to_string(),
    }
}
