//! Syllables command implementation

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use textstats_core::syllable_count;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordSyllables<'a> {
    word: &'a str,
    syllables: usize,
}

/// Print the estimated syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(count = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let counts: Vec<WordSyllables<'_>> = args
        .words
        .iter()
        .map(|word| WordSyllables {
            word,
            syllables: syllable_count(word),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for entry in &counts {
            println!("{}\t{}", entry.word, entry.syllables);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_json_output_succeed() {
        let args = || SyllablesArgs {
            words: vec!["forever".to_string(), "cat".to_string()],
        };
        assert!(cmd_syllables(args(), false).is_ok());
        assert!(cmd_syllables(args(), true).is_ok());
    }
}
