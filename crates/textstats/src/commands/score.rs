//! Score command implementation

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstats_core::{ReadabilityReport, ReportOptions, TextStatistics};

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze (plain text or HTML).
    pub file: Utf8PathBuf,

    /// Maximum acceptable average grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Minimum acceptable Flesch reading ease.
    #[arg(long)]
    pub min_ease: Option<f64>,

    /// Leave capitalised long words out of the long-word count.
    #[arg(long)]
    pub no_proper_nouns: bool,
}

/// Score a file and enforce any configured gates.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_options: ReportOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, min_ease = ?args.min_ease, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let options = ReportOptions {
        count_proper_nouns: config_options.count_proper_nouns && !args.no_proper_nouns,
        max_grade: args.max_grade.or(config_options.max_grade),
        min_reading_ease: args.min_ease.or(config_options.min_reading_ease),
    };

    let report = TextStatistics::new()
        .report(&content, &options)
        .with_context(|| format!("failed to score {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    if report.over_max_grade {
        bail!(
            "{} averages grade {:.1} (max: {:.1}). Shorten sentences or use shorter words.",
            args.file,
            report.average_grade_level,
            report.max_grade.unwrap_or_default(),
        );
    }
    if report.under_min_reading_ease {
        bail!(
            "{} has reading ease {:.1} (min: {:.1}). Shorten sentences or use shorter words.",
            args.file,
            report.flesch_kincaid_reading_ease,
            report.min_reading_ease.unwrap_or_default(),
        );
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &ReadabilityReport) {
    println!("{}", file.bold());
    println!(
        "\n  {} {} words, {} sentences, {} letters, {} syllables, {} long words ({:.1}%)",
        "Counts:".cyan(),
        report.words,
        report.sentences,
        report.letters,
        report.syllables,
        report.long_words,
        report.long_word_percentage,
    );
    println!(
        "  {} {:.2} syllables/word, {:.2} words/sentence",
        "Averages:".cyan(),
        report.average_syllables_per_word,
        report.average_words_per_sentence,
    );

    println!("\n  {}", "Scores:".cyan());
    let rows = [
        ("Flesch reading ease", report.flesch_kincaid_reading_ease),
        ("Flesch-Kincaid grade", report.flesch_kincaid_grade_level),
        ("Gunning fog", report.gunning_fog_score),
        ("Coleman-Liau", report.coleman_liau_index),
        ("SMOG", report.smog_index),
        ("Automated readability", report.automated_readability_index),
        ("Average grade", report.average_grade_level),
    ];
    for (label, score) in rows {
        println!("    {:<22} {score:>6.1}", label.dimmed());
    }

    println!("\n  {} {}", "Interpretation:".cyan(), report.interpretation);

    if let Some(max) = report.max_grade
        && !report.over_max_grade
    {
        println!(
            "  {} average grade {:.1} (max: {max:.1})",
            "PASS:".green(),
            report.average_grade_level,
        );
    }
    if let Some(min) = report.min_reading_ease
        && !report.under_min_reading_ease
    {
        println!(
            "  {} reading ease {:.1} (min: {min:.1})",
            "PASS:".green(),
            report.flesch_kincaid_reading_ease,
        );
    }
}
