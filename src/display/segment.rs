//! Seven-segment digit window decoding.
//!
//! A digit block is four consecutive 8-bit windows, most-significant digit
//! first at the highest offset. Each window is matched against
//! [`DIGIT_PATTERNS`] with the point bit masked out; the point bit is tested
//! separately and denotes a negative sign on the most-significant window and
//! a decimal point on the others.

use crate::bus::transaction::Transaction;
use crate::constants::{DIGITS_PER_BLOCK, DIGIT_WINDOW_LEN};
use crate::display::segment_maps::{DIGIT_PATTERNS, SEGMENT_GLYPH_MASK, SEGMENT_POINT_BIT};
use crate::logging::log_debug;

/// One glyph the display can render in a digit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A numeric digit, '0' through '9'.
    Digit(char),
    /// The overload marker, rendered as an L.
    Overload,
    /// An unlit digit position.
    Blank,
}

/// A decoded digit window: its glyph and whether the point/sign bit was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitToken {
    pub glyph: Glyph,
    pub point: bool,
}

/// A decoded block of four digit windows, most-significant digit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBlock {
    pub tokens: [DigitToken; DIGITS_PER_BLOCK],
    pub overload: bool,
}

/// Matches one window against the glyph table.
///
/// An unmatched window decodes as '0': the caller relies on well-formed
/// input, so this is a graceful fallback rather than an error.
pub fn match_glyph(bits: u8) -> Glyph {
    let masked = bits & SEGMENT_GLYPH_MASK;
    match DIGIT_PATTERNS
        .iter()
        .find(|(_, pattern)| *pattern == masked)
    {
        Some((glyph, _)) => *glyph,
        None => {
            log_debug(&format!(
                "no segment pattern matches {bits:#010b}, defaulting to 0"
            ));
            Glyph::Digit('0')
        }
    }
}

/// Decodes the four digit windows of the block starting at `base`.
pub fn decode_digit_block(transaction: &Transaction, base: usize) -> DigitBlock {
    let mut overload = false;
    let tokens = std::array::from_fn(|i| {
        // Most-significant digit first; it sits at the highest window offset.
        let slot = DIGITS_PER_BLOCK - 1 - i;
        let bits = window_bits(transaction, base + DIGIT_WINDOW_LEN * slot);
        let glyph = match_glyph(bits);
        if glyph == Glyph::Overload {
            overload = true;
        }
        DigitToken {
            glyph,
            point: bits & SEGMENT_POINT_BIT != 0,
        }
    });
    DigitBlock { tokens, overload }
}

fn window_bits(transaction: &Transaction, base: usize) -> u8 {
    (0..DIGIT_WINDOW_LEN).fold(0u8, |acc, i| (acc << 1) | u8::from(transaction.bit(base + i)))
}
