//! Word, sentence, letter and syllable counts.
//!
//! Every function normalizes its input first (see [`crate::normalize`]), so
//! raw or pre-cleaned text gives the same answer.
//!
//! Nothing here guards against empty text. A text with no words has a word
//! count of zero, and every average that divides by it comes back NaN or
//! infinite. Callers that need a number should check [`word_count`] first.
//!
//! Ratios are computed in `f64`. A single-precision division can land on the
//! other side of a one-decimal tie, so rare scores may differ by 0.1 from
//! implementations that divide in `f32`.

use crate::diagnostics::DiagnosticSink;
use crate::error::{StatisticsError, StatisticsResult};
use crate::normalize::normalize;
use crate::syllables::syllable_count;

/// Round to one decimal place, halves to even.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    normalize(text).split_whitespace().count()
}

/// Number of sentence terminators, never less than 1.
pub fn sentence_count(text: &str) -> usize {
    normalize(text)
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
        .max(1)
}

/// Number of ASCII letters.
pub fn letter_count(text: &str) -> usize {
    normalize(text)
        .chars()
        .filter(char::is_ascii_alphabetic)
        .count()
}

/// Sum of the estimated syllables of every word.
pub fn total_syllables(text: &str) -> usize {
    normalize(text).split_whitespace().map(syllable_count).sum()
}

/// Mean syllables per word. NaN for text without words.
pub fn average_syllables_per_word(text: &str) -> f64 {
    total_syllables(text) as f64 / word_count(text) as f64
}

/// Mean words per sentence.
pub fn average_words_per_sentence(text: &str) -> f64 {
    word_count(text) as f64 / sentence_count(text) as f64
}

/// Count words estimated at three or more syllables.
///
/// With `count_proper_nouns` off, a long word only counts when it does not
/// start with an upper-case character. The token is located by substring
/// search in the normalized text, so the match may fall inside a longer,
/// earlier token (`communication` inside `Anticommunication`). The character
/// found there is still the token's own first character, so the casing test
/// only depends on the token itself.
///
/// If the lookup ever fails, the failure goes to `sink` and the count so far
/// is returned.
#[tracing::instrument(skip(text, sink), fields(text_len = text.len()))]
pub fn words_with_three_syllables(
    text: &str,
    count_proper_nouns: bool,
    sink: &dyn DiagnosticSink,
) -> usize {
    let text = normalize(text);
    count_long_words(&text, text.split_whitespace(), count_proper_nouns, sink)
}

/// Share of words estimated at three or more syllables, as a percentage
/// rounded to one decimal.
pub fn percentage_words_with_three_syllables(
    text: &str,
    count_proper_nouns: bool,
    sink: &dyn DiagnosticSink,
) -> f64 {
    let long_words = words_with_three_syllables(text, count_proper_nouns, sink);
    round1(long_words as f64 / word_count(text) as f64 * 100.0)
}

fn count_long_words<'a>(
    text: &str,
    words: impl IntoIterator<Item = &'a str>,
    count_proper_nouns: bool,
    sink: &dyn DiagnosticSink,
) -> usize {
    let mut count = 0;
    for word in words {
        if syllable_count(word) <= 2 {
            continue;
        }
        if count_proper_nouns {
            count += 1;
            continue;
        }
        match first_char_of_occurrence(text, word) {
            Ok(first) if !first.is_uppercase() => count += 1,
            Ok(_) => {}
            Err(error) => {
                sink.report(
                    &format!("error computing words with three syllables for the text - {text}"),
                    &error,
                );
                break;
            }
        }
    }
    count
}

fn first_char_of_occurrence(text: &str, word: &str) -> StatisticsResult<char> {
    let index = text
        .find(word)
        .ok_or_else(|| StatisticsError::WordNotLocated {
            word: word.to_string(),
        })?;
    text[index..]
        .chars()
        .next()
        .ok_or(StatisticsError::IndexOutOfRange {
            index,
            len: text.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use crate::diagnostics::testing::CollectingSink;

    const TWO_SENTENCES: &str = "This is a simple test. It has two sentences.";

    #[test]
    fn counts_simple_text() {
        assert_eq!(word_count(TWO_SENTENCES), 9);
        assert_eq!(sentence_count(TWO_SENTENCES), 2);
        assert_eq!(letter_count(TWO_SENTENCES), 34);
        assert_eq!(total_syllables(TWO_SENTENCES), 11);
    }

    #[test]
    fn sentence_count_is_at_least_one() {
        assert_eq!(sentence_count(""), 1);
        assert_eq!(sentence_count("no terminator at all"), 1);
        assert_eq!(sentence_count("<p>One</p><p>Two</p>"), 2);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(letter_count(""), 0);
        assert!(average_syllables_per_word("").is_nan());
    }

    #[test]
    fn averages() {
        assert!((average_words_per_sentence(TWO_SENTENCES) - 4.5).abs() < 1e-9);
        assert!((average_syllables_per_word(TWO_SENTENCES) - 11.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn numbers_do_not_count_as_letters() {
        assert_eq!(letter_count("abc 123 def"), 6);
    }

    #[test]
    fn long_words_with_proper_nouns() {
        let text = "Communication was excellent.";
        assert_eq!(words_with_three_syllables(text, true, &NullSink), 2);
        assert_eq!(words_with_three_syllables(text, false, &NullSink), 1);
    }

    #[test]
    fn long_words_respect_casing_per_token() {
        let text = "Excellent work. The work was excellent.";
        assert_eq!(words_with_three_syllables(text, false, &NullSink), 1);
    }

    #[test]
    fn lookup_inside_longer_capitalised_token() {
        let text = "Anticommunication and communication.";
        assert_eq!(words_with_three_syllables(text, false, &NullSink), 1);
    }

    #[test]
    fn no_long_words_in_short_text() {
        assert_eq!(words_with_three_syllables(TWO_SENTENCES, true, &NullSink), 0);
        assert_eq!(
            percentage_words_with_three_syllables(TWO_SENTENCES, true, &NullSink),
            0.0
        );
    }

    #[test]
    fn percentage_is_rounded() {
        // 1 of 3 words.
        let text = "Communication is good.";
        assert_eq!(
            percentage_words_with_three_syllables(text, true, &NullSink),
            33.3
        );
    }

    #[test]
    fn percentage_rounds_halves_to_even() {
        // 1 of 16 words is 6.25%.
        let text = "Communication is a big cat and a dog and a rat and a bat in it.";
        assert_eq!(word_count(text), 16);
        assert_eq!(
            percentage_words_with_three_syllables(text, true, &NullSink),
            6.2
        );
    }

    #[test]
    fn round1_ties() {
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.35), 0.4);
        assert_eq!(round1(-1.25), -1.2);
    }

    #[test]
    fn percentage_stays_within_bounds() {
        for text in [
            TWO_SENTENCES,
            "Communication was excellent.",
            "Readability communication excellent.",
            "a",
        ] {
            let pct = percentage_words_with_three_syllables(text, true, &NullSink);
            assert!((0.0..=100.0).contains(&pct), "{text}: {pct}");
        }
    }

    #[test]
    fn lookup_failure_reports_and_returns_partial_count() {
        let sink = CollectingSink::default();
        let text = "excellent work.";
        let count = count_long_words(
            text,
            ["excellent", "communication", "excellent"],
            false,
            &sink,
        );
        assert_eq!(count, 1);

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].0.contains(text));
        assert_eq!(
            reports[0].1,
            StatisticsError::WordNotLocated {
                word: "communication".to_string()
            }
        );
    }

    #[test]
    fn lookup_is_skipped_when_counting_proper_nouns() {
        let sink = CollectingSink::default();
        let count = count_long_words("", ["communication"], true, &sink);
        assert_eq!(count, 1);
        assert!(sink.reports.lock().unwrap().is_empty());
    }
}
