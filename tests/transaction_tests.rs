//! Unit tests for the transaction assembler state machine: opening,
//! buffering, fault flagging, and the validity rules applied at close.

use dmm_lcd_rs::constants::TRANSACTION_UNIT_COUNT;
use dmm_lcd_rs::{Assembler, LcdBusError};

fn filled(assembler: Assembler, units: usize) -> Assembler {
    (0..units).fold(assembler, |assembler, i| assembler.append(i % 2 == 0))
}

/// Tests that a properly opened transaction with exactly 137 units closes
/// cleanly.
#[test]
fn test_complete_transaction_closes_cleanly() {
    let assembler = filled(Assembler::Idle.open(1.5), TRANSACTION_UNIT_COUNT);
    let transaction = assembler.close().unwrap();
    assert_eq!(transaction.len(), TRANSACTION_UNIT_COUNT);
    assert_eq!(transaction.start_time(), 1.5);
}

/// Tests that data units record their arrival order.
#[test]
fn test_units_record_arrival_order() {
    let assembler = filled(Assembler::Idle.open(0.0), TRANSACTION_UNIT_COUNT);
    let transaction = assembler.close().unwrap();
    for (index, unit) in transaction.units().iter().enumerate() {
        assert_eq!(unit.position, index);
        assert_eq!(unit.bit, index % 2 == 0);
    }
    assert!(transaction.bit(0));
    assert!(!transaction.bit(1));
}

/// Tests that reading past the end of the buffer yields false.
#[test]
fn test_bit_past_end_is_false() {
    let assembler = filled(Assembler::Idle.open(0.0), TRANSACTION_UNIT_COUNT);
    let transaction = assembler.close().unwrap();
    assert!(!transaction.bit(TRANSACTION_UNIT_COUNT + 50));
}

/// Tests that closing while idle reports the never-opened cause.
#[test]
fn test_close_while_idle() {
    let invalid = Assembler::Idle.close().unwrap_err();
    assert_eq!(invalid.cause, LcdBusError::NeverOpened);
    assert!(!invalid.enabled);
    assert!(!invalid.faulted);
    assert_eq!(invalid.start_time, None);
}

/// Tests that a short buffer reports the wrong-unit-count cause.
#[test]
fn test_close_with_wrong_unit_count() {
    let invalid = filled(Assembler::Idle.open(2.0), 5).close().unwrap_err();
    assert_eq!(
        invalid.cause,
        LcdBusError::WrongUnitCount {
            expected: TRANSACTION_UNIT_COUNT,
            actual: 5
        }
    );
    assert!(invalid.enabled);
    assert!(!invalid.faulted);
    assert_eq!(invalid.start_time, Some(2.0));
}

/// Tests that an overfull buffer is also rejected.
#[test]
fn test_close_with_excess_units() {
    let invalid = filled(Assembler::Idle.open(0.0), TRANSACTION_UNIT_COUNT + 1)
        .close()
        .unwrap_err();
    assert_eq!(
        invalid.cause,
        LcdBusError::WrongUnitCount {
            expected: TRANSACTION_UNIT_COUNT,
            actual: TRANSACTION_UNIT_COUNT + 1
        }
    );
}

/// Tests that a flagged fault wins over the unit count at close.
#[test]
fn test_flagged_fault_invalidates_close() {
    let assembler = filled(Assembler::Idle.open(3.0), TRANSACTION_UNIT_COUNT).flag_fault();
    let invalid = assembler.close().unwrap_err();
    assert_eq!(invalid.cause, LcdBusError::TransactionFault);
    assert!(invalid.enabled);
    assert!(invalid.faulted);
    assert_eq!(invalid.start_time, Some(3.0));
}

/// Tests that units appended while idle are dropped.
#[test]
fn test_append_while_idle_is_dropped() {
    let assembler = Assembler::Idle.append(true).append(false);
    assert!(!assembler.is_open());
    assert_eq!(assembler.close().unwrap_err().cause, LcdBusError::NeverOpened);
}

/// Tests that flagging a fault while idle is a no-op.
#[test]
fn test_flag_fault_while_idle_is_noop() {
    let assembler = Assembler::Idle.flag_fault();
    assert!(!assembler.is_open());
}

/// Tests that reopening discards a partial buffer.
#[test]
fn test_reopen_discards_partial_buffer() {
    let assembler = filled(Assembler::Idle.open(0.0), 12).open(4.0);
    let transaction = filled(assembler, TRANSACTION_UNIT_COUNT).close().unwrap();
    assert_eq!(transaction.len(), TRANSACTION_UNIT_COUNT);
    assert_eq!(transaction.start_time(), 4.0);
}

/// Tests that reopening also clears a flagged fault.
#[test]
fn test_reopen_clears_fault() {
    let assembler = Assembler::Idle.open(0.0).flag_fault().open(1.0);
    let transaction = filled(assembler, TRANSACTION_UNIT_COUNT).close().unwrap();
    assert_eq!(transaction.start_time(), 1.0);
}
