//! Calculator state engine.
//!
//! This module provides:
//! - The [`Calculator`] state object and its input, memory and evaluation operations
//! - Typed operations with unary and binary arms
//! - Number parsing/formatting and the bounded history log
//! - Copying results to the clipboard

mod clipboard;
mod error;
mod history;
mod number;
mod operation;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use error::CalcError;
pub use history::{HISTORY_LIMIT, History, HistoryEntry};
pub use number::{Number, format_float, parse_operand, trim_for_display};
pub use operation::{BinaryOp, Operation, UnaryOp};
pub use state::{Calculator, Evaluation};
