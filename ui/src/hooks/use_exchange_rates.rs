use api::exchange_rates::ExchangeRates;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// Returns the signal holding the rate table provided by the app root.
///
/// Call `.read()` on it in a component to subscribe to changes.
pub fn use_exchange_rates() -> Signal<Option<ExchangeRates>> {
    use_context::<AppStateMut>().rates
}
