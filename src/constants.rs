//! Display Bus Layout Constants
//!
//! This module defines the fixed bit layout of one LCD driver bus
//! transaction, as produced by the display controller of the supported
//! multimeter family.

/// Number of data units in a complete display transaction.
pub const TRANSACTION_UNIT_COUNT: usize = 137;

/// First data unit of the primary digit block.
pub const PRIMARY_DIGITS_BASE: usize = 9;

/// First data unit of the secondary digit block (frequency display in AC modes).
pub const SECONDARY_DIGITS_BASE: usize = 41;

/// Data units per seven-segment digit window.
pub const DIGIT_WINDOW_LEN: usize = 8;

/// Digit windows per display block.
pub const DIGITS_PER_BLOCK: usize = 4;

// ----------------------------------------------------------------------------
// Flag bit positions within the transaction
// ----------------------------------------------------------------------------

/// Voltage measurement flag
pub const FLAG_VOLTAGE: usize = 128;

/// Current measurement flag
pub const FLAG_CURRENT: usize = 129;

/// Resistance measurement flag
pub const FLAG_RESISTANCE: usize = 132;

/// Temperature measurement flag
pub const FLAG_TEMPERATURE: usize = 134;

/// DC coupling flag
pub const FLAG_DC: usize = 86;

/// AC coupling flag (also gates the secondary digit block)
pub const FLAG_AC: usize = 87;

/// Exponent flag: x10^6
pub const FLAG_EXPONENT_MEGA: usize = 130;

/// Exponent flag: x10^3
pub const FLAG_EXPONENT_KILO: usize = 131;

/// Exponent flag: x10^-3
pub const FLAG_EXPONENT_MILLI: usize = 126;

/// Exponent flag: x10^-6
pub const FLAG_EXPONENT_MICRO: usize = 125;

/// Exponent flag: x10^3 on the secondary display only
pub const FLAG_EXPONENT_SECONDARY_KILO: usize = 73;
