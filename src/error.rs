//! Unified error types for the elevator core.
//!
//! A single `Error` enum that every fallible path converts into.  All
//! variants are `Copy` so they can be passed around without allocation.
//!
//! Note that a position fault is *not* an error here: it is a state
//! transition into `Panic` plus a [`Fault`] notification.

use core::fmt;

use serde::Serialize;

use crate::events::Floor;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// An input line could not be turned into an event.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Input parse errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// First word of the line is not a known event keyword.
    UnknownKeyword,
    /// `call` / `floor` without a floor number.
    MissingFloor,
    /// Floor argument is not a valid integer.
    InvalidFloor,
    /// Extra words after a complete event.
    TrailingInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKeyword => write!(f, "unknown event keyword"),
            Self::MissingFloor => write!(f, "missing floor number"),
            Self::InvalidFloor => write!(f, "invalid floor number"),
            Self::TrailingInput => write!(f, "trailing input after event"),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Faults
// ---------------------------------------------------------------------------

/// Why the Elevator controller entered `Panic`.
///
/// Faults are terminal within the core: they are reported once through the
/// [`FaultSink`](crate::app::ports::FaultSink) and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fault {
    /// A floor sensor reading while moving did not match the predicted floor.
    PositionMismatch {
        last: Floor,
        /// `None` when `last + direction` overflows.
        expected: Option<Floor>,
        reported: Floor,
    },
    /// The fault line was asserted.  `floor` is the last confirmed floor.
    Alarm { floor: Floor },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionMismatch {
                last,
                expected: Some(expected),
                reported,
            } => write!(
                f,
                "position mismatch: last {last}, expected {expected}, sensor reported {reported}"
            ),
            Self::PositionMismatch {
                last,
                expected: None,
                reported,
            } => write!(
                f,
                "position mismatch: last {last}, no valid prediction, sensor reported {reported}"
            ),
            Self::Alarm { floor } => write!(f, "alarm raised at floor {floor}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
