//! Measurement mode and exponent classification.
//!
//! Mode and exponent are read from single flag bits at fixed transaction
//! positions. The instrument sets these independently with no combination
//! validation, so classification is an ordered first-match-wins evaluation;
//! both classifiers are pure functions over the extracted flag set, which
//! keeps ambiguous multi-flag inputs directly testable.

use bitflags::bitflags;

use crate::bus::transaction::Transaction;
use crate::constants::{
    FLAG_AC, FLAG_CURRENT, FLAG_DC, FLAG_EXPONENT_KILO, FLAG_EXPONENT_MEGA, FLAG_EXPONENT_MICRO,
    FLAG_EXPONENT_MILLI, FLAG_EXPONENT_SECONDARY_KILO, FLAG_RESISTANCE, FLAG_TEMPERATURE,
    FLAG_VOLTAGE,
};

bitflags! {
    /// Display flag bits extracted from their fixed transaction positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DisplayFlags: u16 {
        const VOLTAGE = 1 << 0;
        const CURRENT = 1 << 1;
        const RESISTANCE = 1 << 2;
        const TEMPERATURE = 1 << 3;
        const DC = 1 << 4;
        const AC = 1 << 5;
        const EXP_MEGA = 1 << 6;
        const EXP_KILO = 1 << 7;
        const EXP_MILLI = 1 << 8;
        const EXP_MICRO = 1 << 9;
        const EXP_SECONDARY_KILO = 1 << 10;
    }
}

/// Fixed data unit index for each display flag.
const FLAG_BITS: &[(DisplayFlags, usize)] = &[
    (DisplayFlags::VOLTAGE, FLAG_VOLTAGE),
    (DisplayFlags::CURRENT, FLAG_CURRENT),
    (DisplayFlags::RESISTANCE, FLAG_RESISTANCE),
    (DisplayFlags::TEMPERATURE, FLAG_TEMPERATURE),
    (DisplayFlags::DC, FLAG_DC),
    (DisplayFlags::AC, FLAG_AC),
    (DisplayFlags::EXP_MEGA, FLAG_EXPONENT_MEGA),
    (DisplayFlags::EXP_KILO, FLAG_EXPONENT_KILO),
    (DisplayFlags::EXP_MILLI, FLAG_EXPONENT_MILLI),
    (DisplayFlags::EXP_MICRO, FLAG_EXPONENT_MICRO),
    (DisplayFlags::EXP_SECONDARY_KILO, FLAG_EXPONENT_SECONDARY_KILO),
];

/// Exponent flags in precedence order, first match wins.
const EXPONENT_RULES: &[(DisplayFlags, i32)] = &[
    (DisplayFlags::EXP_MILLI, -3),
    (DisplayFlags::EXP_MICRO, -6),
    (DisplayFlags::EXP_KILO, 3),
    (DisplayFlags::EXP_MEGA, 6),
];

/// Reads every display flag from its fixed position in the transaction.
pub fn extract_flags(transaction: &Transaction) -> DisplayFlags {
    FLAG_BITS
        .iter()
        .fold(DisplayFlags::empty(), |flags, &(flag, index)| {
            if transaction.bit(index) {
                flags | flag
            } else {
                flags
            }
        })
}

/// Classifies the measurement mode.
///
/// Categories are tried in order: Voltage, Current, Resistance, Temperature.
/// Within the voltage and current categories the coupling decides the label,
/// and a missing coupling flag leaves the mode unset.
pub fn classify_mode(flags: DisplayFlags) -> Option<&'static str> {
    if flags.contains(DisplayFlags::VOLTAGE) {
        if flags.contains(DisplayFlags::DC) {
            Some("V DC")
        } else if flags.contains(DisplayFlags::AC) {
            Some("V AC")
        } else {
            None
        }
    } else if flags.contains(DisplayFlags::CURRENT) {
        if flags.contains(DisplayFlags::DC) {
            Some("A DC")
        } else if flags.contains(DisplayFlags::AC) {
            Some("A AC")
        } else {
            None
        }
    } else if flags.contains(DisplayFlags::RESISTANCE) {
        Some("Ohm")
    } else if flags.contains(DisplayFlags::TEMPERATURE) {
        Some("°C")
    } else {
        None
    }
}

/// Selects the primary display's decimal exponent, 0 when no flag is set.
pub fn select_exponent(flags: DisplayFlags) -> i32 {
    EXPONENT_RULES
        .iter()
        .find(|(flag, _)| flags.contains(*flag))
        .map_or(0, |(_, exponent)| *exponent)
}
