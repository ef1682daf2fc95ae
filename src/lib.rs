//! # dmm-lcd-rs - A Rust Crate for Decoding Multimeter LCD Bus Captures
//!
//! The dmm-lcd-rs crate decodes logic-analyzer captures of a multimeter's LCD
//! display driver bus into structured measurements: value, unit, mode, and
//! overload/error state.
//!
//! ## Features
//!
//! - Assemble framed bus events (enable, data, disable, error) into display
//!   transactions with strict validity checking
//! - Decode seven-segment digit windows, including decimal-point and sign
//!   markers and the overload glyph
//! - Classify measurement mode and engineering-unit exponent from fixed flag
//!   bits, including the secondary frequency display in AC modes
//! - Produce structured reading frames, or diagnostic error frames for
//!   malformed transactions
//! - Parse plain-text capture exports for the bundled CLI
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! To use the dmm-lcd-rs crate in your Rust project, add the following to
//! your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! dmm-lcd-rs = "1.0.0"
//! ```
//!
//! Then, in your Rust code, you can import the necessary modules and
//! functions:
//!
//! ```rust
//! use dmm_lcd_rs::{
//!     init_logger, parse_capture, BusEvent, LcdAnalyzer, LcdBusError,
//!     LcdReading, OutputFrame, PrimaryValue,
//! };
//! ```

pub mod bus;
pub mod capture;
pub mod constants;
pub mod display;
pub mod error;
pub mod logging;

pub use crate::error::LcdBusError;
pub use crate::logging::{init_logger, log_info};

// Core bus types
pub use bus::analyzer::LcdAnalyzer;
pub use bus::event::{BusEvent, ErrorFrame, OutputFrame, ReadingFrame, TimeSpan};
pub use bus::transaction::{Assembler, DataUnit, InvalidClose, Transaction};

// Display decoding
pub use display::{
    classify_mode, decode_digit_block, decode_reading, extract_flags, match_glyph,
    select_exponent, DigitBlock, DigitToken, DisplayFlags, Glyph, LcdReading, PrimaryValue,
    DIGIT_PATTERNS, OVERLOAD_MARKER, SEGMENT_GLYPH_MASK, SEGMENT_POINT_BIT,
};

// Capture export parsing
pub use capture::parse_capture;
