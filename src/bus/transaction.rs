//! Transaction assembly for the display bus.
//!
//! The assembler is a two-state machine: `Idle` until an enable event opens a
//! buffer, `Open` while data units accumulate. Every transition consumes the
//! current state and returns the next one, so each step can be tested in
//! isolation. A transaction is handed out for decoding only if it was opened,
//! never flagged faulty, and holds exactly
//! [`TRANSACTION_UNIT_COUNT`](crate::constants::TRANSACTION_UNIT_COUNT) units
//! at close.

use crate::constants::TRANSACTION_UNIT_COUNT;
use crate::error::LcdBusError;

/// One sampled bit, positioned by arrival order within its transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUnit {
    pub bit: bool,
    pub position: usize,
}

/// An ordered buffer of data units bounded by one enable-to-disable span.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    start_time: f64,
    faulted: bool,
    units: Vec<DataUnit>,
}

impl Transaction {
    fn new(start_time: f64) -> Self {
        Transaction {
            start_time,
            faulted: false,
            units: Vec::with_capacity(TRANSACTION_UNIT_COUNT),
        }
    }

    /// Start time of the enable frame that opened this transaction.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Value of the data unit at `index`, or false past the end of the buffer.
    pub fn bit(&self, index: usize) -> bool {
        self.units.get(index).map_or(false, |unit| unit.bit)
    }

    /// The buffered data units in arrival order.
    pub fn units(&self) -> &[DataUnit] {
        &self.units
    }

    fn push(&mut self, bit: bool) {
        let position = self.units.len();
        self.units.push(DataUnit { bit, position });
    }
}

/// Cause and state snapshot for a transaction that failed to close cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidClose {
    pub cause: LcdBusError,
    pub enabled: bool,
    pub faulted: bool,
    pub start_time: Option<f64>,
}

/// The transaction assembler state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Assembler {
    #[default]
    Idle,
    Open(Transaction),
}

impl Assembler {
    /// Starts a fresh transaction, discarding any partial buffer.
    pub fn open(self, start_time: f64) -> Assembler {
        Assembler::Open(Transaction::new(start_time))
    }

    /// Buffers one data unit. Units arriving while idle are dropped: with no
    /// open transaction there is nothing to decode them against.
    pub fn append(self, bit: bool) -> Assembler {
        match self {
            Assembler::Idle => Assembler::Idle,
            Assembler::Open(mut transaction) => {
                transaction.push(bit);
                Assembler::Open(transaction)
            }
        }
    }

    /// Marks the open transaction permanently faulty; a later close reports
    /// it instead of decoding it.
    pub fn flag_fault(self) -> Assembler {
        match self {
            Assembler::Idle => Assembler::Idle,
            Assembler::Open(mut transaction) => {
                transaction.faulted = true;
                Assembler::Open(transaction)
            }
        }
    }

    /// Finalizes the transaction, distinguishing the three invalidity causes
    /// so callers can report which one applied.
    pub fn close(self) -> Result<Transaction, InvalidClose> {
        match self {
            Assembler::Idle => Err(InvalidClose {
                cause: LcdBusError::NeverOpened,
                enabled: false,
                faulted: false,
                start_time: None,
            }),
            Assembler::Open(transaction) => {
                if transaction.faulted {
                    Err(InvalidClose {
                        cause: LcdBusError::TransactionFault,
                        enabled: true,
                        faulted: true,
                        start_time: Some(transaction.start_time),
                    })
                } else if transaction.units.len() != TRANSACTION_UNIT_COUNT {
                    Err(InvalidClose {
                        cause: LcdBusError::WrongUnitCount {
                            expected: TRANSACTION_UNIT_COUNT,
                            actual: transaction.units.len(),
                        },
                        enabled: true,
                        faulted: false,
                        start_time: Some(transaction.start_time),
                    })
                } else {
                    Ok(transaction)
                }
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Assembler::Open(_))
    }
}
