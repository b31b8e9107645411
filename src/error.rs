//! Error types for the Shift Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing shift pay or
//! loading workplace configuration.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the Shift Pay Engine.
///
/// All fallible operations in the engine return this error type. Holiday
/// generation and the wage/break resolvers never fail and therefore never
/// produce one.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/workplaces.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/workplaces.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The clocked or pay-bearing interval of a shift has no positive length.
    #[error("Invalid interval on {date} ({start}-{end}): {message}")]
    InvalidInterval {
        /// The date of the shift.
        date: NaiveDate,
        /// The clock-in time.
        start: NaiveTime,
        /// The clock-out time.
        end: NaiveTime,
        /// A description of what made the interval invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
