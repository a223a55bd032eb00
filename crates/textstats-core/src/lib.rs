//! Readability and lexical statistics for English text.
//!
//! Text flows one way through this crate: raw (possibly HTML-tagged) input
//! is [normalized](normalize()), counted by [`metrics`] with per-word syllable
//! estimates from [`syllables`], and scored by [`readability`].
//!
//! # Modules
//!
//! - [`patterns`] - Ordered heuristic tables for syllable estimation
//! - [`normalize`] - Tag stripping and canonical sentence form
//! - [`syllables`] - Rule-based syllable estimation
//! - [`metrics`] - Word, sentence, letter and long-word counts
//! - [`readability`] - The seven readability scores and their interpretation
//! - [`diagnostics`] - Sinks for recovered failures
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textstats_core::{TextStatistics, translate_reading_ease};
//!
//! let stats = TextStatistics::new();
//! let text = "<p>The cat sat on the mat.</p><p>The dog ran fast.</p>";
//!
//! assert_eq!(stats.sentence_count(text), 2);
//! let ease = stats.flesch_kincaid_reading_ease(text);
//! println!("{ease}: {}", translate_reading_ease(ease));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod patterns;
pub mod readability;
pub mod syllables;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::{ConfigError, ConfigResult, StatisticsError, StatisticsResult};
pub use normalize::normalize;
pub use readability::{
    ReadabilityReport, ReadingEaseBand, ReportOptions, TextStatistics, report_schema,
    translate_reading_ease,
};
pub use syllables::syllable_count;
