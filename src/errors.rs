//! Defines application-specific error types.
//!
//! Malformed *domain* data (a non-numeric rating, an unparsable date) never
//! produces an error; it is skipped or treated as a non-match. The errors here
//! cover the ambient concerns: reading input files, decoding JSON, and invalid
//! configuration or command-line filters.

use thiserror::Error;

/// Configuration errors raised while building a [`FilterConfig`](crate::config::FilterConfig).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An option was given a value outside its accepted range.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The option name, as shown on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Two options that cannot be combined were both supplied.
    #[error("Conflicting options: {option1} and {option2}")]
    Conflict {
        /// The first option.
        option1: String,
        /// The second option.
        option2: String,
    },
}

/// Application-specific errors used throughout `frontfilter`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring while reading an input file or directory.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error writing the output stream.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    // --- Decoding Errors ---
    /// An input file was not valid JSON for the expected shape.
    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        /// The file that failed to decode.
        path: String,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Error serializing the output document.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A `FIELD=JSON` filter argument could not be understood.
    #[error("Invalid filter '{arg}': {reason}")]
    InvalidFilter {
        /// The raw argument.
        arg: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// A `Result` alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an [`Error::Json`] with path context.
pub fn json_error_with_path<P: AsRef<std::path::Path>>(
    source: serde_json::Error,
    path: P,
) -> Error {
    Error::Json {
        path: path.as_ref().display().to_string(),
        source,
    }
}
