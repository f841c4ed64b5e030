//! The calculator state engine.

use super::history::{History, HistoryEntry};
use super::number::{Number, format_float, parse_operand};
use super::operation::Operation;
use super::CalcError;

/// Outcome of a successful [`Calculator::evaluate`].
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// Nothing was pending; carries the current input (or `"0"`).
    Unchanged(String),
    /// A pending operation was computed.
    Computed(Number),
}

impl Evaluation {
    /// Text for the primary display region.
    pub fn display(&self) -> String {
        match self {
            Self::Unchanged(text) => text.clone(),
            Self::Computed(number) => number.to_string(),
        }
    }
}

/// Arithmetic entry state: the operand being typed, the captured left
/// operand, at most one pending operation, a memory register and a short
/// history log.
#[derive(Clone, Debug)]
pub struct Calculator {
    current_input: String,
    previous_input: String,
    operation: Option<Operation>,
    memory: f64,
    history: History,
    last_operation_label: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            previous_input: String::new(),
            operation: None,
            memory: 0.0,
            history: History::new(),
            last_operation_label: String::new(),
        }
    }

    /// Digits and decimal point typed since the last operation or clear.
    /// Empty right after an operation is selected.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The left operand captured when the pending operation was selected.
    pub fn previous_input(&self) -> &str {
        &self.previous_input
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// `"<left operand> <operation>"` while an operation is pending.
    pub fn last_operation_label(&self) -> &str {
        &self.last_operation_label
    }

    /// Type a digit or decimal point.
    ///
    /// A second decimal point is ignored and a lone `"0"` is replaced rather
    /// than extended.
    pub fn append_digit(&mut self, value: char) {
        if value == '.' && self.current_input.contains('.') {
            return;
        }
        if self.current_input == "0" && value != '.' {
            self.current_input.clear();
        }
        self.current_input.push(value);
    }

    /// Select the operation to apply to the current input.
    ///
    /// An operation already pending is evaluated first, so `5 + 3 +`
    /// continues from `8`.
    pub fn select_operation(&mut self, op: Operation) {
        if self.current_input.is_empty() {
            return;
        }
        if self.operation.is_some()
            && !self.previous_input.is_empty()
            && let Err(e) = self.evaluate()
        {
            tracing::debug!(error = %e, "Chained evaluation failed, starting over");
        }

        self.previous_input = std::mem::take(&mut self.current_input);
        self.operation = Some(op);
        self.last_operation_label = format!("{} {}", self.previous_input, op);
    }

    /// Compute the pending operation.
    ///
    /// Without a pending operation this just echoes the current input. A
    /// missing right operand repeats the left one (`5 + =` gives `10`). Any
    /// failure resets the calculator, keeping only the memory register.
    pub fn evaluate(&mut self) -> Result<Evaluation, CalcError> {
        let Some(op) = self.operation else {
            return Ok(self.unchanged());
        };
        if self.previous_input.is_empty() {
            return Ok(self.unchanged());
        }

        match self.compute(op) {
            Ok(number) => {
                let expression = format!("{} {} {}", self.previous_input, op, self.current_input);
                let result = number.to_string();
                self.history.push(HistoryEntry::new(expression, result.clone()));

                self.current_input = result;
                self.operation = None;
                self.last_operation_label.clear();
                Ok(Evaluation::Computed(number))
            }
            Err(e) => {
                self.clear_all();
                Err(e)
            }
        }
    }

    fn unchanged(&self) -> Evaluation {
        if self.current_input.is_empty() {
            Evaluation::Unchanged("0".to_string())
        } else {
            Evaluation::Unchanged(self.current_input.clone())
        }
    }

    fn compute(&self, op: Operation) -> Result<Number, CalcError> {
        let lhs = parse_operand(&self.previous_input).ok_or(CalcError::Generic)?;
        // A typed right operand must parse even when a unary operation ignores it.
        let rhs = if self.current_input.is_empty() {
            lhs
        } else {
            parse_operand(&self.current_input).ok_or(CalcError::Generic)?
        };
        let value = match op {
            Operation::Binary(binary) => binary.apply(lhs, rhs)?,
            Operation::Unary(unary) => unary.apply(lhs)?,
        };
        Ok(Number::from_f64(value))
    }

    /// Reset the current input to `"0"`.
    ///
    /// The pending operation, left operand, history and memory all survive.
    pub fn clear_entry(&mut self) {
        self.current_input = "0".to_string();
    }

    /// Reset everything except the memory register.
    pub fn clear_all(&mut self) {
        self.current_input = "0".to_string();
        self.previous_input.clear();
        self.operation = None;
        self.last_operation_label.clear();
        self.history.clear();
    }

    pub fn memory_add(&mut self) {
        if let Some(value) = parse_operand(&self.current_input) {
            self.memory += value;
        }
    }

    pub fn memory_subtract(&mut self) {
        if let Some(value) = parse_operand(&self.current_input) {
            self.memory -= value;
        }
    }

    /// Replace the current input with the memory register, written as a full
    /// float (`"5.0"`).
    pub fn memory_recall(&mut self) {
        self.current_input = format_float(self.memory);
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// Divide the current input by 100. Unparseable input is left alone.
    pub fn percentage(&mut self) {
        if let Some(value) = parse_operand(&self.current_input) {
            self.current_input = format_float(value / 100.0);
        }
    }

    pub fn toggle_sign(&mut self) {
        if self.current_input.starts_with('-') {
            self.current_input.remove(0);
        } else {
            self.current_input.insert(0, '-');
        }
    }
}
