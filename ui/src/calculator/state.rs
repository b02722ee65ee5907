use dioxus_logger::tracing::{debug, warn};

use super::evaluation::{evaluate_expression, format_number};

/// Text shown when an expression or conversion cannot be computed.
pub const ERROR_TEXT: &str = "Error";

/// The four arithmetic operators on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The character appended to the input for this operator.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

/// A discrete input event for the calculator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// A digit key; the payload is appended verbatim.
    Number(char),
    Operator(Operator),
    Decimal,
    Equals,
    /// Convert the working value using this mid-rate (local units per one
    /// foreign unit).
    Currency(f64),
    Clear,
}

/// The input buffer and the last computed value.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CalculatorState {
    /// Raw expression text, or the string form of the last computed value.
    pub input: String,
    /// Last computed value. Zero after an error.
    pub result: f64,
}

impl CalculatorState {
    /// Computes the state that follows `action`.
    pub fn reduce(&self, action: Action) -> Self {
        match action {
            Action::Number(digit) => self.appended(digit),
            Action::Operator(op) => self.appended(op.symbol()),
            // Checks the whole input, not just the operand being typed, so
            // "1.5+2" cannot get a second point.
            Action::Decimal if self.input.contains('.') => self.clone(),
            Action::Decimal => self.appended('.'),
            Action::Equals => match evaluate_expression(&self.input) {
                Ok(value) => Self::computed(value),
                Err(e) => {
                    debug!("{}", e);
                    Self::error()
                }
            },
            Action::Currency(rate) => self.converted(rate),
            Action::Clear => Self::default(),
        }
    }

    /// What the result field shows: the input if any, else the result.
    pub fn display(&self) -> String {
        if self.input.is_empty() {
            format_number(self.result)
        } else {
            self.input.clone()
        }
    }

    pub fn is_error(&self) -> bool {
        self.input == ERROR_TEXT
    }

    fn appended(&self, c: char) -> Self {
        let mut input = self.input.clone();
        input.push(c);
        Self {
            input,
            result: self.result,
        }
    }

    fn computed(value: f64) -> Self {
        Self {
            input: format_number(value),
            result: value,
        }
    }

    fn error() -> Self {
        Self {
            input: ERROR_TEXT.to_string(),
            result: 0.0,
        }
    }

    /// Divides the working value by `rate`.
    ///
    /// The working value is the input when there is one, else the result.
    /// A rate that is not a positive finite number leaves the state as is.
    fn converted(&self, rate: f64) -> Self {
        if !rate.is_finite() || rate <= 0.0 {
            warn!("ignoring currency conversion with unusable rate {}", rate);
            return self.clone();
        }

        let value = if self.input.is_empty() {
            self.result
        } else {
            match self.input.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => {
                    debug!("cannot convert non-numeric input '{}'", self.input);
                    return Self::error();
                }
            }
        };

        let quotient = value / rate;
        if quotient.is_finite() {
            Self::computed(quotient)
        } else {
            Self::error()
        }
    }
}
