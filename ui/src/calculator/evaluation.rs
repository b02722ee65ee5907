//! Expression evaluation using fasteval.
//!
//! Wraps fasteval to provide a simple interface for evaluating the
//! arithmetic typed on the keypad and formatting results for the display.

use std::collections::BTreeMap;

use thiserror::Error;

/// Why an expression could not be turned into a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression is not valid arithmetic (e.g. "7/", "2+*2", "").
    #[error("cannot evaluate '{expression}': {message}")]
    Parse { expression: String, message: String },
    /// The expression evaluated to infinity or NaN (e.g. "1/0").
    #[error("'{expression}' does not evaluate to a finite number")]
    NotFinite { expression: String },
}

/// Evaluate an arithmetic expression.
///
/// Only finite results are returned; division by zero is an error.
/// fasteval refuses expressions longer than 4096 bytes, so a longer input
/// is a parse error even if it is valid arithmetic.
pub fn evaluate_expression(input: &str) -> Result<f64, EvalError> {
    let expression = input.trim();

    // Use an empty namespace (no custom variables)
    let mut namespace = BTreeMap::<String, f64>::new();

    let value = fasteval::ez_eval(expression, &mut namespace).map_err(|e| EvalError::Parse {
        expression: expression.to_string(),
        message: format!("{:?}", e),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NotFinite {
            expression: expression.to_string(),
        })
    }
}

/// Format a number for the display.
///
/// Integral values have no fractional part ("4"); everything else uses the
/// shortest representation that parses back to the same value.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    value.to_string()
}
