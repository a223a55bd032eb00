//! Text normalization.
//!
//! Turns arbitrary, possibly HTML-tagged input into a canonical plain-text
//! form: one space between tokens, `.` as the only terminator, every
//! terminator followed by a space (except the final one), and no digits.
//!
//! The rewrites run in a fixed order and each one assumes the previous ones
//! already ran. HTML handling is a flat tag strip, not a parse.

use regex::Regex;
use std::sync::LazyLock;

/// Block-level elements whose closing tag ends a sentence.
///
/// The closing tag becomes a terminator even when the element's text already
/// ends in punctuation; the duplicate collapses later.
pub const SENTENCE_ENDING_TAGS: &[&str] = &["li", "p", "h1", "h2", "h3", "h4", "h5", "h6", "dd"];

/// Complete tags, then any unpaired angle bracket.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>|[<>]").expect("valid regex"));

/// Separators that become word breaks.
static SEPARATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[",:;()\-]"#).expect("valid regex"));

static TERMINATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("valid regex"));

static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A terminator followed by more terminators and/or spaces.
static TERMINATOR_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[. ]+").expect("valid regex"));

/// A terminator with any spaces in front of it.
static PADDED_TERMINATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\.").expect("valid regex"));

static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

static SPACES_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));

/// Normalize `text` for word and sentence counting.
///
/// Empty input is returned unchanged. Anything else comes back with exactly
/// one trailing `.`, even if it had no terminator at all.
///
/// Numbers are removed outright, which also removes dates and figures.
///
/// # Examples
///
/// ```
/// use textstats_core::normalize::normalize;
///
/// assert_eq!(normalize("<p>First</p><p>Second</p>"), "First. Second.");
/// assert_eq!(normalize("Wait!! Really?"), "Wait. Really.");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut text = text.to_string();
    for tag in SENTENCE_ENDING_TAGS {
        text = text.replace(&format!("</{tag}>"), ".");
    }

    let text = TAG_PATTERN.replace_all(&text, "");
    let text = SEPARATOR_PATTERN.replace_all(&text, " ");
    let text = TERMINATOR_PATTERN.replace_all(&text, ".");
    let text = format!("{}.", text.trim());
    let text = WHITESPACE_PATTERN.replace_all(&text, " ");
    let text = collapse_terminators(&text);

    let text = DIGITS_PATTERN.replace_all(&text, " ");
    // Removing a number can strand a terminator ("3. 14." -> " .  .").
    let text = collapse_terminators(&text);
    let text = SPACES_PATTERN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Collapse terminator runs to one `.` and pad each with a following space.
fn collapse_terminators(text: &str) -> String {
    let text = TERMINATOR_RUN_PATTERN.replace_all(text, ".");
    let text = PADDED_TERMINATOR_PATTERN.replace_all(&text, ". ");
    text.trim().to_string()
}
