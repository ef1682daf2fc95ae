//! Input events and output records at the decoder boundary.
//!
//! Events arrive from an external framing analyzer that has already split the
//! raw capture into enable, data, disable, and error frames. The decoder
//! answers with reading or error frames, each covering the time span of the
//! bus activity it was derived from.

use serde::Serialize;

use crate::display::reading::LcdReading;

/// Capture-relative time span of one frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

/// One event produced by the framing analyzer.
///
/// Data unit positions are implicit: the first `Data` event after an
/// `Enable` is unit 0, the next unit 1, and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum BusEvent {
    /// The enable line went active; a transaction begins.
    Enable { span: TimeSpan },
    /// One sampled bit of bus traffic.
    Data { span: TimeSpan, bit: bool },
    /// The enable line went inactive; the transaction is complete.
    Disable { span: TimeSpan },
    /// The framing analyzer detected a clock fault.
    Error { span: TimeSpan },
    /// Any frame kind this decoder does not know.
    Unknown { span: TimeSpan, kind: String },
}

impl BusEvent {
    /// Time span of the underlying frame.
    pub fn span(&self) -> TimeSpan {
        match self {
            BusEvent::Enable { span }
            | BusEvent::Data { span, .. }
            | BusEvent::Disable { span }
            | BusEvent::Error { span }
            | BusEvent::Unknown { span, .. } => *span,
        }
    }
}

/// A decoded display snapshot, spanning enable edge to disable edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingFrame {
    pub span: TimeSpan,
    pub reading: LcdReading,
}

/// A diagnostic record for a transaction that could not be decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorFrame {
    pub span: TimeSpan,
    pub error_info: String,
}

/// One output record of the decoder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputFrame {
    Reading(ReadingFrame),
    Error(ErrorFrame),
}
