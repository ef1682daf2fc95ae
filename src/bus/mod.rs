//! The bus module contains the components that track the lifecycle of one
//! display bus transaction, from the enable edge to the closing disable or
//! error event.

pub mod analyzer;
pub mod event;
pub mod transaction;

pub use analyzer::LcdAnalyzer;
pub use event::{BusEvent, ErrorFrame, OutputFrame, ReadingFrame, TimeSpan};
pub use transaction::{Assembler, DataUnit, InvalidClose, Transaction};
