//! Readability scores.
//!
//! Seven formulas composed over the counts in [`crate::metrics`]:
//!
//! | score | formula |
//! |---|---|
//! | Flesch reading ease | `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)` |
//! | Flesch-Kincaid grade | `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59` |
//! | Gunning fog | `0.4 * ((words/sentences) + long-word percentage)` |
//! | Coleman-Liau | `5.89 * (letters/words) - 0.3 * (sentences/words) - 15.8` |
//! | SMOG | `1.043 * sqrt(long words * (30 / sentences) + 3.1291)` |
//! | Automated readability | `4.71 * (letters/words) + 0.5 * (words/sentences) - 21.43` |
//!
//! Every score is rounded to one decimal. Higher reading ease means easier
//! text; every other score approximates a school grade.
//!
//! Like the metrics, the formulas do not guard against empty text and return
//! NaN or infinity for it. [`TextStatistics::report`] is the exception: it
//! rejects empty input with [`StatisticsError::EmptyInput`].

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{StatisticsError, StatisticsResult};
use crate::metrics::{self, round1};
use crate::normalize;
use crate::syllables;

/// Interpretation of a Flesch reading ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingEaseBand {
    /// 0 to 30.
    UniversityGraduate,
    /// Above 30, up to 50.
    UniversityUndergraduate,
    /// Above 50, up to 59.9.
    ALevel,
    /// 60 to 70.
    AgeThirteenToFifteen,
    /// Above 70, up to 89.9.
    AgeTwelve,
    /// 90 to 100.
    AgeEleven,
    /// Anything that falls in no band, including NaN.
    OutOfRange,
}

impl ReadingEaseBand {
    /// Classify a reading ease score.
    pub fn from_score(score: f64) -> Self {
        if (0.0..=30.0).contains(&score) {
            Self::UniversityGraduate
        } else if score > 30.0 && score <= 50.0 {
            Self::UniversityUndergraduate
        } else if score > 50.0 && score <= 59.9 {
            Self::ALevel
        } else if (60.0..=70.0).contains(&score) {
            Self::AgeThirteenToFifteen
        } else if score > 70.0 && score <= 89.9 {
            Self::AgeTwelve
        } else if (90.0..=100.0).contains(&score) {
            Self::AgeEleven
        } else {
            Self::OutOfRange
        }
    }

    /// Human-readable description of the band.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UniversityGraduate => "Best understood by university graduates",
            Self::UniversityUndergraduate => "Best understood by university undergraduates",
            Self::ALevel => "Best understood by A'Level students",
            Self::AgeThirteenToFifteen => {
                "Easily understood by an average 13 to 15 year old students"
            }
            Self::AgeTwelve => "Easily understood by an average 12 year old student",
            Self::AgeEleven => "Easily understood by an average 11 year old student",
            Self::OutOfRange => "SOMETHING WENT WRONG WITH THE SCORING",
        }
    }
}

impl std::fmt::Display for ReadingEaseBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe a reading ease score in words.
///
/// Scores outside every band (below 0, above 100, NaN) get an explicit
/// "something went wrong" message rather than a misleading label.
pub fn translate_reading_ease(score: f64) -> &'static str {
    ReadingEaseBand::from_score(score).description()
}

/// JSON Schema for [`ReadabilityReport`], for consumers of `--json` output.
pub fn report_schema() -> schemars::Schema {
    schemars::schema_for!(ReadabilityReport)
}

/// Options for [`TextStatistics::report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Whether capitalised long words count towards the reported long-word figures.
    pub count_proper_nouns: bool,
    /// Maximum acceptable average grade level.
    pub max_grade: Option<f64>,
    /// Minimum acceptable Flesch reading ease.
    pub min_reading_ease: Option<f64>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            count_proper_nouns: true,
            max_grade: None,
            min_reading_ease: None,
        }
    }
}

/// Every count and score for one text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Number of letters.
    pub letters: usize,
    /// Estimated syllables across all words.
    pub syllables: usize,
    /// Words of three or more syllables.
    pub long_words: usize,
    /// Long words as a percentage of all words.
    pub long_word_percentage: f64,
    /// Mean syllables per word.
    pub average_syllables_per_word: f64,
    /// Mean words per sentence.
    pub average_words_per_sentence: f64,
    /// Flesch reading ease.
    pub flesch_kincaid_reading_ease: f64,
    /// Flesch-Kincaid grade level.
    pub flesch_kincaid_grade_level: f64,
    /// Gunning fog score.
    pub gunning_fog_score: f64,
    /// Coleman-Liau index.
    pub coleman_liau_index: f64,
    /// SMOG index.
    pub smog_index: f64,
    /// Automated readability index.
    pub automated_readability_index: f64,
    /// Mean of the five grade-level scores.
    pub average_grade_level: f64,
    /// Band the reading ease falls in.
    pub reading_ease_band: ReadingEaseBand,
    /// Description of the reading ease band.
    pub interpretation: String,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the average grade level exceeds the maximum.
    pub over_max_grade: bool,
    /// Minimum acceptable reading ease (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_reading_ease: Option<f64>,
    /// Whether the reading ease is below the minimum.
    pub under_min_reading_ease: bool,
}

/// Entry point for every statistic, with a configurable diagnostic sink.
///
/// Each method normalizes its own input, so raw or already-normalized text
/// can be passed interchangeably.
///
/// ```
/// use textstats_core::TextStatistics;
///
/// let stats = TextStatistics::new();
/// let text = "This is a simple test. It has two sentences.";
/// assert_eq!(stats.word_count(text), 9);
/// assert_eq!(stats.sentence_count(text), 2);
/// assert_eq!(stats.flesch_kincaid_reading_ease(text), 98.9);
/// ```
#[derive(Clone)]
pub struct TextStatistics {
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for TextStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextStatistics").finish_non_exhaustive()
    }
}

impl Default for TextStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStatistics {
    /// Statistics that report recovered failures through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Statistics that report recovered failures to `sink`.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// See [`normalize::normalize`].
    pub fn normalize(&self, text: &str) -> String {
        normalize::normalize(text)
    }

    /// See [`syllables::syllable_count`].
    pub fn syllable_count(&self, word: &str) -> usize {
        syllables::syllable_count(word)
    }

    /// See [`metrics::word_count`].
    pub fn word_count(&self, text: &str) -> usize {
        metrics::word_count(text)
    }

    /// See [`metrics::sentence_count`].
    pub fn sentence_count(&self, text: &str) -> usize {
        metrics::sentence_count(text)
    }

    /// See [`metrics::letter_count`].
    pub fn letter_count(&self, text: &str) -> usize {
        metrics::letter_count(text)
    }

    /// See [`metrics::total_syllables`].
    pub fn total_syllables(&self, text: &str) -> usize {
        metrics::total_syllables(text)
    }

    /// See [`metrics::average_syllables_per_word`].
    pub fn average_syllables_per_word(&self, text: &str) -> f64 {
        metrics::average_syllables_per_word(text)
    }

    /// See [`metrics::average_words_per_sentence`].
    pub fn average_words_per_sentence(&self, text: &str) -> f64 {
        metrics::average_words_per_sentence(text)
    }

    /// See [`metrics::words_with_three_syllables`].
    pub fn words_with_three_syllables(&self, text: &str, count_proper_nouns: bool) -> usize {
        metrics::words_with_three_syllables(text, count_proper_nouns, self.sink.as_ref())
    }

    /// See [`metrics::percentage_words_with_three_syllables`].
    pub fn percentage_words_with_three_syllables(
        &self,
        text: &str,
        count_proper_nouns: bool,
    ) -> f64 {
        metrics::percentage_words_with_three_syllables(
            text,
            count_proper_nouns,
            self.sink.as_ref(),
        )
    }

    /// Flesch reading ease.
    pub fn flesch_kincaid_reading_ease(&self, text: &str) -> f64 {
        let text = normalize::normalize(text);
        round1(
            1.015f64.mul_add(
                -metrics::average_words_per_sentence(&text),
                84.6f64.mul_add(-metrics::average_syllables_per_word(&text), 206.835),
            ),
        )
    }

    /// Flesch-Kincaid grade level.
    pub fn flesch_kincaid_grade_level(&self, text: &str) -> f64 {
        let text = normalize::normalize(text);
        round1(
            0.39f64.mul_add(
                metrics::average_words_per_sentence(&text),
                11.8 * metrics::average_syllables_per_word(&text),
            ) - 15.59,
        )
    }

    /// Gunning fog score. Capitalised long words are not counted.
    pub fn gunning_fog_score(&self, text: &str) -> f64 {
        let text = normalize::normalize(text);
        round1(
            (metrics::average_words_per_sentence(&text)
                + self.percentage_words_with_three_syllables(&text, false))
                * 0.4,
        )
    }

    /// Coleman-Liau index.
    pub fn coleman_liau_index(&self, text: &str) -> f64 {
        let text = normalize::normalize(text);
        let words = metrics::word_count(&text) as f64;
        let letters = metrics::letter_count(&text) as f64;
        let sentences = metrics::sentence_count(&text) as f64;
        round1(5.89 * letters / words - 0.3 * (sentences / words) - 15.8)
    }

    /// SMOG index. The `30 / sentences` factor uses whole-number division.
    pub fn smog_index(&self, text: &str) -> f64 {
        let text = normalize::normalize(text);
        let long_words = self.words_with_three_syllables(&text, true);
        let per_thirty = 30 / metrics::sentence_count(&text);
        round1(1.043 * ((long_words * per_thirty) as f64 + 3.1291).sqrt())
    }

    /// Automated readability index.
    pub fn automated_readability_index(&self, text: &str) -> f64 {
        let text = normalize::normalize(text);
        let words = metrics::word_count(&text) as f64;
        let letters = metrics::letter_count(&text) as f64;
        let sentences = metrics::sentence_count(&text) as f64;
        round1(4.71f64.mul_add(letters / words, 0.5 * (words / sentences)) - 21.43)
    }

    /// Mean of the Flesch-Kincaid grade, Gunning fog, SMOG, Coleman-Liau and
    /// automated readability scores.
    pub fn average_grade_level(&self, text: &str) -> f64 {
        let text = normalize::normalize(text);
        let total = self.flesch_kincaid_grade_level(&text)
            + self.gunning_fog_score(&text)
            + self.smog_index(&text)
            + self.coleman_liau_index(&text)
            + self.automated_readability_index(&text);
        round1(total / 5.0)
    }

    /// Compute every count and score for `text` in one pass over the API.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::EmptyInput`] when the text has no words.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn report(
        &self,
        text: &str,
        options: &ReportOptions,
    ) -> StatisticsResult<ReadabilityReport> {
        let text = normalize::normalize(text);
        let words = metrics::word_count(&text);
        if words == 0 || text.chars().all(|c| !c.is_alphanumeric()) {
            return Err(StatisticsError::EmptyInput);
        }

        let reading_ease = self.flesch_kincaid_reading_ease(&text);
        let average_grade_level = self.average_grade_level(&text);
        let band = ReadingEaseBand::from_score(reading_ease);

        let over_max_grade = options
            .max_grade
            .is_some_and(|max| average_grade_level > max);
        let under_min_reading_ease = options
            .min_reading_ease
            .is_some_and(|min| reading_ease < min);

        tracing::debug!(
            words,
            reading_ease,
            average_grade_level,
            "computed readability"
        );

        Ok(ReadabilityReport {
            words,
            sentences: metrics::sentence_count(&text),
            letters: metrics::letter_count(&text),
            syllables: metrics::total_syllables(&text),
            long_words: self.words_with_three_syllables(&text, options.count_proper_nouns),
            long_word_percentage: self
                .percentage_words_with_three_syllables(&text, options.count_proper_nouns),
            average_syllables_per_word: metrics::average_syllables_per_word(&text),
            average_words_per_sentence: metrics::average_words_per_sentence(&text),
            flesch_kincaid_reading_ease: reading_ease,
            flesch_kincaid_grade_level: self.flesch_kincaid_grade_level(&text),
            gunning_fog_score: self.gunning_fog_score(&text),
            coleman_liau_index: self.coleman_liau_index(&text),
            smog_index: self.smog_index(&text),
            automated_readability_index: self.automated_readability_index(&text),
            average_grade_level,
            reading_ease_band: band,
            interpretation: band.description().to_string(),
            max_grade: options.max_grade,
            over_max_grade,
            min_reading_ease: options.min_reading_ease,
            under_min_reading_ease,
        })
    }
}
