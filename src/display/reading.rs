//! Reading composition.
//!
//! Digit tokens concatenate into a decimal string with embedded sign and
//! point markers, which then parses to a number and picks up the exponent
//! multiplier. The overload glyph anywhere on the display replaces the
//! primary value with a marker; the secondary display composes independently
//! and only exists in AC modes.

use serde::{Serialize, Serializer};

use crate::bus::transaction::Transaction;
use crate::constants::{PRIMARY_DIGITS_BASE, SECONDARY_DIGITS_BASE};
use crate::display::mode::{classify_mode, extract_flags, select_exponent, DisplayFlags};
use crate::display::segment::{decode_digit_block, DigitBlock, Glyph};
use crate::logging::log_debug;

/// Marker shown in place of a numeric value when the reading exceeds the
/// display range.
pub const OVERLOAD_MARKER: &str = "Overload!";

/// Primary display value: a number, or the overload marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimaryValue {
    Numeric(f64),
    Overload,
}

impl Serialize for PrimaryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PrimaryValue::Numeric(value) => serializer.serialize_f64(*value),
            PrimaryValue::Overload => serializer.serialize_str(OVERLOAD_MARKER),
        }
    }
}

impl std::fmt::Display for PrimaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryValue::Numeric(value) => write!(f, "{value}"),
            PrimaryValue::Overload => f.write_str(OVERLOAD_MARKER),
        }
    }
}

/// One decoded display snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LcdReading {
    /// Measurement mode label, empty when the flags leave it unset.
    pub mode: String,
    /// Primary display value with the exponent multiplier applied.
    pub value: PrimaryValue,
    /// Secondary display value (frequency in AC modes), 0.0 when absent.
    pub secondary: f64,
}

/// Decodes a complete, validated transaction into a reading.
pub fn decode_reading(transaction: &Transaction) -> LcdReading {
    let flags = extract_flags(transaction);
    let primary = decode_digit_block(transaction, PRIMARY_DIGITS_BASE);
    // The secondary block only carries digits while an AC mode is active.
    let secondary_block = flags
        .contains(DisplayFlags::AC)
        .then(|| decode_digit_block(transaction, SECONDARY_DIGITS_BASE));

    let overload =
        primary.overload || secondary_block.as_ref().map_or(false, |block| block.overload);

    let value = if overload {
        PrimaryValue::Overload
    } else {
        let magnitude = parse_magnitude(&compose_digits(&primary));
        PrimaryValue::Numeric(magnitude * 10f64.powi(select_exponent(flags)))
    };

    let secondary = match secondary_block {
        Some(block) => {
            let mut value = parse_magnitude(&compose_digits(&block));
            if flags.contains(DisplayFlags::EXP_SECONDARY_KILO) {
                value *= 1e3;
            }
            value
        }
        None => 0.0,
    };

    LcdReading {
        mode: classify_mode(flags).unwrap_or("").to_string(),
        value,
        secondary,
    }
}

/// Concatenates a digit block into a decimal string. The point bit renders as
/// a leading minus on the most-significant digit and as a decimal point on
/// the others; blank digits contribute nothing.
fn compose_digits(block: &DigitBlock) -> String {
    let mut text = String::new();
    for (i, token) in block.tokens.iter().enumerate() {
        if token.point {
            text.push(if i == 0 { '-' } else { '.' });
        }
        match token.glyph {
            Glyph::Digit(c) => text.push(c),
            Glyph::Overload => text.push('L'),
            Glyph::Blank => {}
        }
    }
    text
}

fn parse_magnitude(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            log_debug(&format!("digit string {text:?} is not a number, defaulting to 0"));
            0.0
        }
    }
}
