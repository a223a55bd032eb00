//! Error types for textstats-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while computing text statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    /// A token could not be found in the text it was split from.
    #[error("word {word:?} not found in normalized text")]
    WordNotLocated {
        /// The token that was searched for.
        word: String,
    },

    /// A located index has no character behind it.
    #[error("index {index} out of range for text of length {len}")]
    IndexOutOfRange {
        /// Byte offset that was looked up.
        index: usize,
        /// Byte length of the text.
        len: usize,
    },

    /// The input text has no countable words.
    #[error("no scorable text in input")]
    EmptyInput,
}

/// Result type alias using [`StatisticsError`].
pub type StatisticsResult<T> = Result<T, StatisticsError>;
