//! The operations a calculator can have pending.

use std::fmt;

use super::CalcError;

/// A pending operation.
///
/// Unary operations only ever see the left operand, so they cannot be handed
/// a right operand by mistake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    SquareRoot,
}

impl Operation {
    pub const ADD: Self = Self::Binary(BinaryOp::Add);
    pub const SUBTRACT: Self = Self::Binary(BinaryOp::Subtract);
    pub const MULTIPLY: Self = Self::Binary(BinaryOp::Multiply);
    pub const DIVIDE: Self = Self::Binary(BinaryOp::Divide);
    pub const POWER: Self = Self::Binary(BinaryOp::Power);
    pub const SQUARE_ROOT: Self = Self::Unary(UnaryOp::SquareRoot);

    /// Every operation, in button order.
    pub const ALL: [Self; 6] = [
        Self::ADD,
        Self::SUBTRACT,
        Self::MULTIPLY,
        Self::DIVIDE,
        Self::POWER,
        Self::SQUARE_ROOT,
    ];

    /// Look up an operation by its symbol. Unknown symbols yield `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The symbol shown on buttons, labels and history entries.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Binary(op) => op.symbol(),
            Self::Unary(op) => op.symbol(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// Sums, differences and products follow plain `f64` arithmetic and may
    /// reach infinity. A power that overflows or has no real value fails.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Power => {
                if lhs == 0.0 && rhs < 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                let result = lhs.powf(rhs);
                if result.is_nan() && !lhs.is_nan() && !rhs.is_nan() {
                    // Negative base with a fractional exponent.
                    return Err(CalcError::Generic);
                }
                if result.is_infinite() && lhs.is_finite() && rhs.is_finite() {
                    return Err(CalcError::Generic);
                }
                Ok(result)
            }
        }
    }
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::SquareRoot => "√",
        }
    }

    pub fn apply(self, operand: f64) -> Result<f64, CalcError> {
        match self {
            Self::SquareRoot => {
                if operand < 0.0 {
                    Err(CalcError::Generic)
                } else {
                    Ok(operand.sqrt())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol("%"), None);
        assert_eq!(Operation::from_symbol(""), None);
    }

    #[test]
    fn test_square_root_is_unary() {
        assert!(matches!(Operation::SQUARE_ROOT, Operation::Unary(_)));
        assert_eq!(UnaryOp::SquareRoot.apply(16.0), Ok(4.0));
        assert_eq!(UnaryOp::SquareRoot.apply(-4.0), Err(CalcError::Generic));
    }

    #[test]
    fn test_division() {
        assert_eq!(BinaryOp::Divide.apply(9.0, 3.0), Ok(3.0));
        assert_eq!(BinaryOp::Divide.apply(5.0, 0.0), Err(CalcError::DivideByZero));
        assert_eq!(BinaryOp::Divide.apply(5.0, -0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_power_edge_cases() {
        assert_eq!(BinaryOp::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(BinaryOp::Power.apply(4.0, 0.5), Ok(2.0));
        assert_eq!(BinaryOp::Power.apply(0.0, -1.0), Err(CalcError::DivideByZero));
        assert_eq!(BinaryOp::Power.apply(-8.0, 0.5), Err(CalcError::Generic));
        assert_eq!(BinaryOp::Power.apply(10.0, 400.0), Err(CalcError::Generic));
    }

    #[test]
    fn test_sums_may_reach_infinity() {
        assert_eq!(BinaryOp::Add.apply(f64::MAX, f64::MAX), Ok(f64::INFINITY));
    }
}
