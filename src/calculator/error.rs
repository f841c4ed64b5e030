//! Evaluation failures.

use thiserror::Error;

/// Why an evaluation could not produce a number.
///
/// The `Display` text is what the calculator shows in place of the result.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The right operand of a division was zero, or zero was raised to a
    /// negative power.
    #[error("Error: Div/0")]
    DivideByZero,
    /// Any other failure: an unparseable operand, an overflowing power, or a
    /// result that is not a real number.
    #[error("Error")]
    Generic,
}
