//! # LCD Bus Error Handling
//!
//! This module defines the LcdBusError enum, which represents the different
//! error types that can occur in the dmm-lcd-rs crate.

use thiserror::Error;

/// Represents the different error types that can occur while decoding the
/// display bus.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LcdBusError {
    /// Indicates a transaction was closed without ever being opened.
    #[error("transaction was never opened")]
    NeverOpened,

    /// Indicates a transaction was flagged faulty mid-stream.
    #[error("transaction was flagged faulty mid-stream")]
    TransactionFault,

    /// Indicates a closed transaction held the wrong number of data units.
    #[error("wrong data unit count: expected {expected}, got {actual}")]
    WrongUnitCount { expected: usize, actual: usize },

    /// Indicates the clock line was in the wrong state at an enable transition.
    #[error("the clock was in the wrong state when the enable signal transitioned to active")]
    ClockState,

    /// Indicates an event kind this decoder does not know.
    #[error("unexpected frame type from input analyzer: {0}")]
    UnexpectedEvent(String),

    /// Indicates a capture export line could not be parsed.
    #[error("error parsing capture line: {0}")]
    CaptureParseError(String),
}
