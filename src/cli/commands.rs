//! Command implementations for Speller CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: SpellerArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_text(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Distance(distance_args) => show_distance(distance_args.clone(), &args),
    }
}

/// Load the corrector configuration named on the command line, if any.
fn load_config(cli_args: &SpellerArgs) -> Result<CorrectorConfig> {
    match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            CorrectorConfig::from_file(path)
        }
        None => Ok(CorrectorConfig::default()),
    }
}

/// Spell-check a text file and rewrite it in place.
fn check_text(args: CheckArgs, cli_args: &SpellerArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    config.dry_run |= args.dry_run;
    if args.sequential {
        config.parallel = false;
    }

    let mut timings = Timings::default();

    let start_time = Instant::now();
    let dictionary = Dictionary::load(&args.dictionary)?;
    timings.load = start_time.elapsed();

    let rewritten = !config.dry_run;
    let corrector = SpellingCorrector::with_config(dictionary, config);
    let report = corrector.correct_file(&args.text)?;
    timings.check = report.check_time;

    let mut dictionary = corrector.into_dictionary();

    let start_time = Instant::now();
    let words_in_dictionary = dictionary.size();
    timings.size = start_time.elapsed();

    let start_time = Instant::now();
    dictionary.unload()?;
    timings.unload = start_time.elapsed();

    let summary = CheckSummary {
        text: args.text.to_string_lossy().to_string(),
        dictionary: args.dictionary.to_string_lossy().to_string(),
        words_misspelled: report.misspellings(),
        words_in_text: report.words_in_text,
        corrections: report.corrections,
        words_in_dictionary,
        timings,
        rewritten,
    };

    output_check_summary(&summary, cli_args)
}

/// Suggest the best dictionary match for one word.
fn suggest_word(args: SuggestArgs, cli_args: &SpellerArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let dictionary = Dictionary::load(&args.dictionary)?;
    let corrector = SpellingCorrector::with_config(dictionary, config);

    let best = corrector.suggest(&args.word)?;
    let result = SuggestionResult {
        word: args.word.clone(),
        correct: corrector.is_correct(&args.word),
        suggestion: best.word.to_string(),
        distance: best.distance,
    };

    output_result("Best match", &result, cli_args)
}

/// Show the edit distance between two words.
fn show_distance(args: DistanceArgs, cli_args: &SpellerArgs) -> Result<()> {
    let distance = edit_distance(&args.source, &args.target);
    let result = DistanceResult {
        source: args.source,
        target: args.target,
        distance,
    };

    output_result("Edit distance", &result, cli_args)
}
