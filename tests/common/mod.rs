//! Shared helpers for building display bus transactions in tests.

#![allow(dead_code)]

use dmm_lcd_rs::constants::{
    DIGITS_PER_BLOCK, DIGIT_WINDOW_LEN, PRIMARY_DIGITS_BASE, SECONDARY_DIGITS_BASE,
    TRANSACTION_UNIT_COUNT,
};
use dmm_lcd_rs::{
    Assembler, BusEvent, Glyph, TimeSpan, Transaction, DIGIT_PATTERNS, SEGMENT_POINT_BIT,
};

/// Glyph pattern for a display character: a digit, 'L', or ' ' for blank.
pub fn pattern_for(c: char) -> u8 {
    let glyph = match c {
        ' ' => Glyph::Blank,
        'L' => Glyph::Overload,
        digit => Glyph::Digit(digit),
    };
    DIGIT_PATTERNS
        .iter()
        .find(|(candidate, _)| *candidate == glyph)
        .map(|(_, pattern)| *pattern)
        .unwrap()
}

pub fn span_at(t: f64) -> TimeSpan {
    TimeSpan {
        start: t,
        end: t + 0.0005,
    }
}

/// Builds the 137 bits of one transaction from digits and flag positions.
pub struct TransactionBuilder {
    bits: Vec<bool>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        TransactionBuilder {
            bits: vec![false; TRANSACTION_UNIT_COUNT],
        }
    }

    pub fn flag(mut self, index: usize) -> Self {
        self.bits[index] = true;
        self
    }

    /// Writes an 8-bit pattern into digit `slot` (3 = most significant) of
    /// the block at `base`, optionally with the point/sign bit set.
    pub fn pattern(mut self, base: usize, slot: usize, pattern: u8, point: bool) -> Self {
        let pattern = if point {
            pattern | SEGMENT_POINT_BIT
        } else {
            pattern
        };
        let start = base + DIGIT_WINDOW_LEN * slot;
        for i in 0..DIGIT_WINDOW_LEN {
            self.bits[start + i] = pattern & (0x80 >> i) != 0;
        }
        self
    }

    pub fn primary_digit(self, slot: usize, c: char, point: bool) -> Self {
        self.pattern(PRIMARY_DIGITS_BASE, slot, pattern_for(c), point)
    }

    pub fn secondary_digit(self, slot: usize, c: char, point: bool) -> Self {
        self.pattern(SECONDARY_DIGITS_BASE, slot, pattern_for(c), point)
    }

    /// Writes a four-character display string into the block at `base`, most
    /// significant first; a character preceded by '.' or '-' gets the point
    /// bit.
    pub fn display(mut self, base: usize, text: &str) -> Self {
        let mut slot = DIGITS_PER_BLOCK;
        let mut point = false;
        for c in text.chars() {
            if c == '.' || c == '-' {
                point = true;
                continue;
            }
            slot -= 1;
            self = self.pattern(base, slot, pattern_for(c), point);
            point = false;
        }
        assert_eq!(slot, 0, "display text must hold four digit characters");
        self
    }

    pub fn primary(self, text: &str) -> Self {
        self.display(PRIMARY_DIGITS_BASE, text)
    }

    pub fn secondary(self, text: &str) -> Self {
        self.display(SECONDARY_DIGITS_BASE, text)
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// A full enable / data / disable event sequence for these bits.
    pub fn events(&self, start: f64) -> Vec<BusEvent> {
        let mut t = start;
        let mut out = vec![BusEvent::Enable { span: span_at(t) }];
        for &bit in &self.bits {
            t += 0.001;
            out.push(BusEvent::Data {
                span: span_at(t),
                bit,
            });
        }
        out.push(BusEvent::Disable {
            span: span_at(t + 0.001),
        });
        out
    }

    /// A validated transaction holding these bits.
    pub fn transaction(&self) -> Transaction {
        let mut assembler = Assembler::Idle.open(0.0);
        for &bit in &self.bits {
            assembler = assembler.append(bit);
        }
        assembler.close().unwrap()
    }
}
