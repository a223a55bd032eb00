//! Rule-based syllable estimation.
//!
//! There is no dictionary behind this: a word is reduced to lower-case
//! letters, common one-syllable affixes are peeled off and counted, the
//! remaining vowel runs are counted, and the pattern tables in
//! [`crate::patterns`] nudge the total up or down. A short exception list
//! short-circuits the whole thing.

use regex::Regex;
use std::sync::LazyLock;

use crate::patterns::{self, ADDITIVE_PATTERNS, AFFIX_PATTERNS, SUBTRACTIVE_PATTERNS};

/// Runs of consonants; splitting on these leaves the vowel groups.
static CONSONANT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^aeiouy]+").expect("valid regex"));

/// Reduce a token to lower-case ASCII letters.
fn letters_only(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Strip affixes in table order, returning the shortened word and how many were removed.
///
/// Each match removes every occurrence of the matched text, not just the
/// anchored one.
fn strip_affixes(word: String) -> (String, usize) {
    AFFIX_PATTERNS
        .iter()
        .fold((word, 0), |(word, count), pattern| {
            let matched: Vec<String> = pattern
                .find_iter(&word)
                .map(|m| m.as_str().to_string())
                .collect();
            let removed = matched.len();
            let word = matched
                .iter()
                .fold(word, |word, affix| word.replace(affix.as_str(), ""));
            (word, count + removed)
        })
}

fn vowel_groups(word: &str) -> usize {
    CONSONANT_RUN
        .split(word)
        .filter(|group| !group.is_empty())
        .count()
}

/// Estimate the syllables in a single word. Always at least 1.
///
/// Non-letters are ignored, so `"Hello,"` and `"hello"` agree.
///
/// # Examples
///
/// ```
/// use textstats_core::syllables::syllable_count;
///
/// assert_eq!(syllable_count("forever"), 3);
/// assert_eq!(syllable_count("walked"), 1);
/// assert_eq!(syllable_count("readability"), 5);
/// ```
pub fn syllable_count(word: &str) -> usize {
    let word = letters_only(word);

    if let Some(count) = patterns::exception(&word) {
        return count;
    }

    let (word, affixes) = strip_affixes(word);
    let word = letters_only(&word);

    let base = (vowel_groups(&word) + affixes) as i64;
    let subtract = SUBTRACTIVE_PATTERNS
        .iter()
        .filter(|p| p.is_match(&word))
        .count() as i64;
    let add = ADDITIVE_PATTERNS
        .iter()
        .filter(|p| p.is_match(&word))
        .count() as i64;

    usize::try_from(base - subtract + add).map_or(1, |count| count.max(1))
}
