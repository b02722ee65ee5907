//! Defines the mutable, reactive state for the application's UI.

use api::exchange_rates::ExchangeRates;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// A signal holding the fetched rate table. `None` while loading; an
    /// empty table when the fetch failed.
    pub rates: Signal<Option<ExchangeRates>>,
}
