//! The two visible text regions, derived from calculator state.

use crate::calculator::{CalcError, Calculator, trim_for_display};

/// What the screen shows after every action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayText {
    /// The large value line: current input or an error message.
    pub primary: String,
    /// The small line above it: the pending operation or the last expression.
    pub annotation: String,
}

impl DisplayText {
    /// Project the calculator state. `error` is the failure from the most
    /// recent evaluation, shown in place of the value until the next action.
    pub fn from_calculator(calculator: &Calculator, error: Option<&CalcError>) -> Self {
        let primary = match error {
            Some(e) => e.to_string(),
            None => match trim_for_display(calculator.current_input()) {
                "" => "0".to_string(),
                text => text.to_string(),
            },
        };

        let annotation = if !calculator.last_operation_label().is_empty() {
            calculator.last_operation_label().to_string()
        } else {
            calculator
                .history()
                .last()
                .map(|entry| entry.expression.trim().to_string())
                .unwrap_or_default()
        };

        Self {
            primary,
            annotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn test_initial_display() {
        let text = DisplayText::from_calculator(&Calculator::new(), None);
        assert_eq!(text.primary, "0");
        assert_eq!(text.annotation, "");
    }

    #[test]
    fn test_pending_operation_annotation() {
        let mut calc = Calculator::new();
        calc.append_digit('2');
        calc.append_digit('5');
        calc.select_operation(Operation::ADD);

        let text = DisplayText::from_calculator(&calc, None);
        assert_eq!(text.primary, "0");
        assert_eq!(text.annotation, "25 +");
    }

    #[test]
    fn test_annotation_falls_back_to_last_expression() {
        let mut calc = Calculator::new();
        calc.append_digit('5');
        calc.select_operation(Operation::ADD);
        let _ = calc.evaluate();

        let text = DisplayText::from_calculator(&calc, None);
        assert_eq!(text.primary, "10");
        assert_eq!(text.annotation, "5 +");
    }

    #[test]
    fn test_primary_is_trimmed_but_state_is_not() {
        let mut calc = Calculator::new();
        calc.append_digit('5');
        calc.memory_add();
        calc.memory_recall();

        let text = DisplayText::from_calculator(&calc, None);
        assert_eq!(text.primary, "5");
        assert_eq!(calc.current_input(), "5.0");
    }

    #[test]
    fn test_error_replaces_primary() {
        let mut calc = Calculator::new();
        calc.append_digit('1');
        calc.select_operation(Operation::DIVIDE);
        calc.append_digit('0');
        let error = calc.evaluate().err();

        let text = DisplayText::from_calculator(&calc, error.as_ref());
        assert_eq!(text.primary, "Error: Div/0");
        assert_eq!(text.annotation, "");

        let text = DisplayText::from_calculator(&calc, Some(&CalcError::Generic));
        assert_eq!(text.primary, "Error");
    }
}
