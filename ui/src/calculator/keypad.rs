//! Keypad layout and classification of key labels into actions.

use api::exchange_rates::ExchangeRates;
use api::fiat_currency::FiatCurrency;

use super::state::{Action, Operator};

/// Keypad labels in display order, four per row.
pub const BUTTON_LABELS: [&str; 20] = [
    "1", "2", "3", "+", "4", "5", "6", "-", "7", "8", "9", "*", "0", ".", "C", "/", "=", "GBP",
    "EUR", "USD",
];

pub const CLEAR: &str = "C";
pub const EQUALS: &str = "=";
pub const DECIMAL: &str = ".";

/// The visual group a key belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Operator,
    /// Clear, equals and the decimal point.
    Command,
    Currency(FiatCurrency),
}

fn single_char(label: &str) -> Option<char> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn currency_of(label: &str) -> Option<FiatCurrency> {
    FiatCurrency::CONVERTIBLE
        .into_iter()
        .find(|currency| currency.code() == label)
}

/// Returns the group of `label`, or `None` for labels the keypad does not know.
pub fn kind_of(label: &str) -> Option<KeyKind> {
    if let Some(c) = single_char(label) {
        if c.is_ascii_digit() {
            return Some(KeyKind::Digit);
        }
        if Operator::from_symbol(c).is_some() {
            return Some(KeyKind::Operator);
        }
    }
    match label {
        CLEAR | EQUALS | DECIMAL => Some(KeyKind::Command),
        _ => currency_of(label).map(KeyKind::Currency),
    }
}

/// Turns a pressed label into an action.
///
/// Currency keys only produce an action once their rate is loaded; before
/// that, and for unknown labels, the press is ignored.
pub fn classify(label: &str, rates: Option<&ExchangeRates>) -> Option<Action> {
    match kind_of(label)? {
        KeyKind::Digit => single_char(label).map(Action::Number),
        KeyKind::Operator => single_char(label)
            .and_then(Operator::from_symbol)
            .map(Action::Operator),
        KeyKind::Command => match label {
            CLEAR => Some(Action::Clear),
            EQUALS => Some(Action::Equals),
            _ => Some(Action::Decimal),
        },
        KeyKind::Currency(currency) => rates?.get(currency).map(Action::Currency),
    }
}

/// Whether the key for `label` can do anything right now.
///
/// A currency key is enabled only while its own rate is loaded; every other
/// key is always enabled.
pub fn is_enabled(label: &str, rates: Option<&ExchangeRates>) -> bool {
    match kind_of(label) {
        Some(KeyKind::Currency(currency)) => rates.and_then(|r| r.get(currency)).is_some(),
        _ => true,
    }
}

/// Maps a keyboard key name to the keypad label it stands for.
///
/// Digits, operators and "." map to themselves; "Enter" is "=", and
/// "Escape" or "c" is "C". Currency keys have no keyboard binding.
pub fn label_for_key(key: &str) -> Option<&'static str> {
    match key {
        "Enter" | EQUALS => Some(EQUALS),
        "Escape" | "c" | CLEAR => Some(CLEAR),
        _ => BUTTON_LABELS
            .into_iter()
            .find(|label| *label == key && single_char(label).is_some()),
    }
}
