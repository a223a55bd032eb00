//! Heuristic pattern tables for syllable estimation.
//!
//! Every table is an ordered slice: the estimator walks them front to back,
//! and the affix table in particular depends on that order because each
//! removal shortens the word seen by the next pattern.
//!
//! Patterns are compiled once, on first use, and shared read-only for the
//! life of the process.

use regex::Regex;
use std::sync::LazyLock;

/// Words whose syllable count overrides the heuristics entirely.
pub const EXCEPTIONS: &[(&str, usize)] = &[("simile", 3), ("forever", 3), ("shoreline", 2)];

/// Letter groups the vowel-run count sees as two syllables but are spoken as one.
///
/// The weight column is carried for reference only: a match always costs
/// exactly one syllable.
pub const SUBTRACTIVE: &[(&str, u8)] = &[
    ("cial", 1),
    ("tia", 1),
    ("cius", 1),
    ("cious", 1),
    ("giu", 1),
    ("ion", 1),
    ("iou", 1),
    ("sia$", 1),
    ("[^aeiuoyt]{2,}ed$", 1),
    (".ely$", 1),
    ("[cg]h?e[rsd]?$", 1),
    ("rved?$", 1),
    ("[aeiouy][dt]es?$", 1),
    ("[aeiouy][^aeiouydt]e[rsd]?$", 1),
    ("[aeiouy]rse$", 1),
];

/// Letter groups the vowel-run count sees as one syllable but are spoken as two.
///
/// As with [`SUBTRACTIVE`], the weight is documentation; a match adds one.
pub const ADDITIVE: &[(&str, u8)] = &[
    ("ia", 2),
    ("riet", 2),
    ("dien", 2),
    ("iu", 2),
    ("io", 2),
    ("ii", 2),
    ("[aeiouym]bl$", 2),
    ("[aeiou]{3}", 2),
    ("^mc", 2),
    ("ism$", 2),
    (DOUBLED_CONSONANT_L, 2),
    ("[^l]lien", 2),
    ("^coa[dglx].", 2),
    ("[^gq]ua[^auieo]", 2),
    ("dnt$", 2),
    ("uity$", 2),
    ("ie(r|st)$", 2),
];

/// A doubled consonant before a final `l` ("ll", "ttl", ...).
///
/// Spelled out per consonant because the regex engine has no back-references.
const DOUBLED_CONSONANT_L: &str = "(?:bb|cc|dd|ff|gg|hh|jj|kk|ll|mm|nn|pp|qq|rr|ss|tt|vv|ww|xx|zz)l$";

/// Single-syllable prefixes and suffixes, stripped in this order before counting vowel runs.
pub const AFFIXES: &[&str] = &["^un", "^fore", "ly$", "less$", "ful$", "ers?$", "ings?$"];

/// A compiled heuristic with its documented weight.
#[derive(Debug)]
pub struct WeightedPattern {
    /// The compiled expression, matched against a lower-case letters-only word.
    pub regex: Regex,
    /// Weight recorded in the table. Never used as a multiplier.
    pub weight: u8,
}

impl WeightedPattern {
    /// Whether this pattern matches anywhere in `word`.
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

fn compile_weighted(table: &[(&str, u8)]) -> Vec<WeightedPattern> {
    table
        .iter()
        .map(|&(pattern, weight)| WeightedPattern {
            regex: Regex::new(pattern).expect("valid regex"),
            weight,
        })
        .collect()
}

/// Compiled [`SUBTRACTIVE`] table, in table order.
pub static SUBTRACTIVE_PATTERNS: LazyLock<Vec<WeightedPattern>> =
    LazyLock::new(|| compile_weighted(SUBTRACTIVE));

/// Compiled [`ADDITIVE`] table, in table order.
pub static ADDITIVE_PATTERNS: LazyLock<Vec<WeightedPattern>> =
    LazyLock::new(|| compile_weighted(ADDITIVE));

/// Compiled [`AFFIXES`] table, in table order.
pub static AFFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    AFFIXES
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid regex"))
        .collect()
});

/// Look up an exception word. `word` must already be lower-case letters only.
pub fn exception(word: &str) -> Option<usize> {
    EXCEPTIONS
        .iter()
        .find(|(known, _)| *known == word)
        .map(|&(_, count)| count)
}
