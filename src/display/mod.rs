//! The display module contains the components that turn a closed transaction
//! buffer into a structured reading: seven-segment glyph decoding, flag
//! classification, and value composition.

pub mod mode;
pub mod reading;
pub mod segment;
pub mod segment_maps;

pub use mode::{classify_mode, extract_flags, select_exponent, DisplayFlags};
pub use reading::{decode_reading, LcdReading, PrimaryValue, OVERLOAD_MARKER};
pub use segment::{decode_digit_block, match_glyph, DigitBlock, DigitToken, Glyph};
pub use segment_maps::{DIGIT_PATTERNS, SEGMENT_GLYPH_MASK, SEGMENT_POINT_BIT};
