//! Input mapping.
//!
//! Buttons and keys are translated into a fixed set of symbolic [`Action`]s,
//! and each action is dispatched to exactly one [`Calculator`] method.

use std::fmt;

use crate::calculator::{CalcError, Calculator, Operation};

/// Everything a user can ask the calculator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// `AC`
    ClearAll,
    /// `C`
    ClearEntry,
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    Operation(Operation),
    /// `=`
    Evaluate,
    /// `±`
    ToggleSign,
    /// `%`
    Percentage,
    /// `MC`
    MemoryClear,
    /// `M+`
    MemoryAdd,
    /// `M-`
    MemorySubtract,
    /// `MR`
    MemoryRecall,
}

impl Action {
    /// Parse a button label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let action = match label {
            "AC" => Self::ClearAll,
            "C" => Self::ClearEntry,
            "=" => Self::Evaluate,
            "±" => Self::ToggleSign,
            "%" => Self::Percentage,
            "MC" => Self::MemoryClear,
            "M+" => Self::MemoryAdd,
            "M-" => Self::MemorySubtract,
            "MR" => Self::MemoryRecall,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || c == '.' => Self::Digit(c),
                    _ => Self::Operation(Operation::from_symbol(label)?),
                }
            }
        };
        Some(action)
    }

    /// The button label for this action.
    pub fn label(&self) -> String {
        match self {
            Self::ClearAll => "AC".to_string(),
            Self::ClearEntry => "C".to_string(),
            Self::Digit(c) => c.to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percentage => "%".to_string(),
            Self::MemoryClear => "MC".to_string(),
            Self::MemoryAdd => "M+".to_string(),
            Self::MemorySubtract => "M-".to_string(),
            Self::MemoryRecall => "MR".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A key press, reduced to what the keyboard table cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
}

impl Key {
    /// Interpret a raw character, treating CR/LF as Enter and BS as
    /// Backspace.
    pub fn from_char(c: char) -> Self {
        match c {
            '\r' | '\n' => Self::Enter,
            '\x08' => Self::Backspace,
            c => Self::Char(c),
        }
    }
}

/// Map a key press to an action. Unmapped keys yield `None`.
pub fn action_for_key(key: Key) -> Option<Action> {
    let c = match key {
        Key::Enter => return Some(Action::Evaluate),
        Key::Backspace => return Some(Action::ClearEntry),
        Key::Char(c) => c,
    };

    match c {
        '0'..='9' | '.' => Some(Action::Digit(c)),
        '+' => Some(Action::Operation(Operation::ADD)),
        '-' => Some(Action::Operation(Operation::SUBTRACT)),
        '*' => Some(Action::Operation(Operation::MULTIPLY)),
        '/' => Some(Action::Operation(Operation::DIVIDE)),
        '^' => Some(Action::Operation(Operation::POWER)),
        'q' | 'Q' => Some(Action::Operation(Operation::SQUARE_ROOT)),
        '=' => Some(Action::Evaluate),
        '%' => Some(Action::Percentage),
        'c' => Some(Action::ClearEntry),
        'a' => Some(Action::ClearAll),
        'm' => Some(Action::MemoryAdd),
        'r' => Some(Action::MemoryRecall),
        _ => None,
    }
}

/// Apply an action to the calculator.
///
/// Only [`Action::Evaluate`] can fail; every other action always succeeds.
pub fn dispatch(calculator: &mut Calculator, action: Action) -> Result<(), CalcError> {
    tracing::debug!(%action, "Dispatching action");

    match action {
        Action::ClearAll => calculator.clear_all(),
        Action::ClearEntry => calculator.clear_entry(),
        Action::Digit(c) => calculator.append_digit(c),
        Action::Operation(op) => calculator.select_operation(op),
        Action::Evaluate => {
            let evaluation = calculator.evaluate()?;
            tracing::debug!(result = %evaluation.display(), "Evaluated");
        }
        Action::ToggleSign => calculator.toggle_sign(),
        Action::Percentage => calculator.percentage(),
        Action::MemoryClear => calculator.memory_clear(),
        Action::MemoryAdd => calculator.memory_add(),
        Action::MemorySubtract => calculator.memory_subtract(),
        Action::MemoryRecall => calculator.memory_recall(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(calc: &mut Calculator, keys: &str) -> Result<(), CalcError> {
        let mut outcome = Ok(());
        for c in keys.chars() {
            if let Some(action) = action_for_key(Key::from_char(c)) {
                outcome = dispatch(calc, action);
            }
        }
        outcome
    }

    #[test]
    fn test_labels_round_trip() {
        let labels = [
            "AC", "C", "0", "7", ".", "+", "-", "*", "/", "^", "√", "=", "±", "%", "MC", "M+",
            "M-", "MR",
        ];
        for label in labels {
            let action = Action::from_label(label);
            assert_eq!(action.map(|a| a.label()).as_deref(), Some(label));
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(Action::from_label(""), None);
        assert_eq!(Action::from_label("x"), None);
        assert_eq!(Action::from_label("12"), None);
        assert_eq!(Action::from_label("MS"), None);
    }

    #[test]
    fn test_keyboard_table() {
        assert_eq!(action_for_key(Key::Char('7')), Some(Action::Digit('7')));
        assert_eq!(action_for_key(Key::Char('.')), Some(Action::Digit('.')));
        assert_eq!(action_for_key(Key::Enter), Some(Action::Evaluate));
        assert_eq!(action_for_key(Key::Char('=')), Some(Action::Evaluate));
        assert_eq!(action_for_key(Key::Backspace), Some(Action::ClearEntry));
        assert_eq!(action_for_key(Key::Char('c')), Some(Action::ClearEntry));
        assert_eq!(action_for_key(Key::Char('a')), Some(Action::ClearAll));
        assert_eq!(action_for_key(Key::Char('m')), Some(Action::MemoryAdd));
        assert_eq!(action_for_key(Key::Char('r')), Some(Action::MemoryRecall));
        assert_eq!(action_for_key(Key::Char('%')), Some(Action::Percentage));
        assert_eq!(
            action_for_key(Key::Char('Q')),
            Some(Action::Operation(Operation::SQUARE_ROOT))
        );
        assert_eq!(
            action_for_key(Key::Char('^')),
            Some(Action::Operation(Operation::POWER))
        );
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        for c in ['x', 'C', 'A', 'M', 'R', ' ', '(', '±'] {
            assert_eq!(action_for_key(Key::Char(c)), None, "{c:?}");
        }
    }

    #[test]
    fn test_key_from_char() {
        assert_eq!(Key::from_char('\r'), Key::Enter);
        assert_eq!(Key::from_char('\n'), Key::Enter);
        assert_eq!(Key::from_char('\x08'), Key::Backspace);
        assert_eq!(Key::from_char('5'), Key::Char('5'));
        assert_eq!(Key::from_char('\x7f'), Key::Char('\x7f'));
        assert_eq!(action_for_key(Key::from_char('\x7f')), None);
    }

    #[test]
    fn test_typed_session() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "12*3\r"), Ok(()));
        assert_eq!(calc.current_input(), "36");

        assert_eq!(press(&mut calc, "m a r"), Ok(()));
        assert_eq!(calc.current_input(), "36.0");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_dispatch_reports_evaluation_errors() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "5/0="), Err(CalcError::DivideByZero));
        assert_eq!(calc.current_input(), "0");
    }

    #[test]
    fn test_toggle_sign_and_memory_subtract_dispatch() {
        let mut calc = Calculator::new();
        for label in ["4", "±", "M-", "MR"] {
            let action = Action::from_label(label).unwrap();
            dispatch(&mut calc, action).unwrap();
        }
        assert_eq!(calc.memory(), 4.0);
        assert_eq!(calc.current_input(), "4.0");
    }
}
