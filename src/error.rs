//! Error types for the enigmacrypt library.
//!
//! Only machine configuration can fail. Once an [`EnigmaMachine`](crate::EnigmaMachine)
//! exists, encryption has no error path.

use thiserror::Error;

/// Errors produced while loading or validating a machine configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The settings file could not be read.
    #[error("Cannot read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// The settings document is not valid JSON or has the wrong shape.
    #[error("Malformed settings document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Rotor number is outside the valid range [1, 5].
    #[error("Rotor number {0} is not between 1 and 5")]
    InvalidRotorNumber(i64),
    /// Rotor starting position is outside the valid range [1, 26].
    #[error("Rotor {slot} position {position} is not between 1 and 26")]
    InvalidRotorPosition {
        /// Zero-based slot of the offending rotor in the rotor triple.
        slot: usize,
        /// Configured one-based position.
        position: i64,
    },
    /// Reflector identifier is not one of A, B or C.
    #[error("Reflector '{0}' is not one of A, B or C")]
    InvalidReflector(String),
    /// A plug entry is not exactly two distinct uppercase letters.
    #[error("Plug '{0}' must be exactly two distinct letters A-Z")]
    InvalidPlugPair(String),
    /// A letter is used by more than one plug pair.
    #[error("Letter '{0}' appears in more than one plug pair")]
    DuplicatePlugLetter(char),
}
