//! Top-level event processing for the display bus.
//!
//! The analyzer routes each incoming event through the transaction assembler
//! and decodes the buffer when a transaction closes. Every disable or error
//! event leaves the assembler idle again, so one malformed transaction never
//! corrupts the next; an unknown event kind is reported without touching the
//! assembler, since it implies no transaction framing.

use crate::bus::event::{BusEvent, ErrorFrame, OutputFrame, ReadingFrame, TimeSpan};
use crate::bus::transaction::Assembler;
use crate::display::reading::decode_reading;
use crate::error::LcdBusError;
use crate::logging::log_debug;

/// Decodes a stream of framed bus events into reading and error frames.
#[derive(Debug, Default)]
pub struct LcdAnalyzer {
    assembler: Assembler,
}

impl LcdAnalyzer {
    /// Creates an analyzer with an idle assembler.
    pub fn new() -> Self {
        LcdAnalyzer {
            assembler: Assembler::Idle,
        }
    }

    /// Processes one bus event, returning an output frame when one is due.
    ///
    /// Enable and data events only update the assembler; disable events close
    /// and decode the transaction; error events abort it with a clock fault
    /// diagnostic.
    pub fn process(&mut self, event: BusEvent) -> Option<OutputFrame> {
        match event {
            BusEvent::Enable { span } => {
                self.assembler = std::mem::take(&mut self.assembler).open(span.start);
                None
            }
            BusEvent::Data { bit, .. } => {
                self.assembler = std::mem::take(&mut self.assembler).append(bit);
                None
            }
            BusEvent::Disable { span } => Some(self.finish(span)),
            BusEvent::Error { span } => {
                self.assembler = Assembler::Idle;
                Some(OutputFrame::Error(ErrorFrame {
                    span,
                    error_info: LcdBusError::ClockState.to_string(),
                }))
            }
            BusEvent::Unknown { span, kind } => Some(OutputFrame::Error(ErrorFrame {
                span,
                error_info: LcdBusError::UnexpectedEvent(kind).to_string(),
            })),
        }
    }

    fn finish(&mut self, span: TimeSpan) -> OutputFrame {
        match std::mem::take(&mut self.assembler).close() {
            Ok(transaction) => {
                let reading = decode_reading(&transaction);
                log_debug(&format!("decoded reading: {reading:?}"));
                OutputFrame::Reading(ReadingFrame {
                    span: TimeSpan {
                        start: transaction.start_time(),
                        end: span.end,
                    },
                    reading,
                })
            }
            Err(invalid) => OutputFrame::Error(ErrorFrame {
                span,
                error_info: format!(
                    "invalid display transaction: {} (enabled={}, faulted={}, start_time={:?})",
                    invalid.cause, invalid.enabled, invalid.faulted, invalid.start_time
                ),
            }),
        }
    }
}
