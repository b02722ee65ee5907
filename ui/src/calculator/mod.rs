//! The calculator core: a pure state machine driven by keypad actions.
//!
//! Nothing in here touches Dioxus, so every transition can be tested
//! without rendering.

mod evaluation;
pub mod keypad;
mod state;

pub use evaluation::{evaluate_expression, format_number, EvalError};
pub use state::{Action, CalculatorState, Operator};
