//! The calculator widget: result field, keypad and rates panel.
#![allow(non_snake_case)]

use api::exchange_rates::ExchangeRates;
use dioxus::prelude::*;

use crate::calculator::keypad::{self, KeyKind};
use crate::calculator::CalculatorState;
use crate::components::pico::{Button, ButtonType, Card};
use crate::components::rates_panel::RatesPanel;
use crate::hooks::use_exchange_rates::use_exchange_rates;

/// Classifies `label` and applies the resulting action, if any.
fn press(
    mut state: Signal<CalculatorState>,
    rates: Signal<Option<ExchangeRates>>,
    label: &str,
) {
    let action = keypad::classify(label, rates.read().as_ref());
    match action {
        Some(action) => {
            let next = state.peek().reduce(action);
            state.set(next);
        }
        None => dioxus_logger::tracing::debug!("ignoring key {:?}", label),
    }
}

#[component]
fn KeyButton(
    label: &'static str,
    #[props(default = false)] disabled: bool,
    on_press: EventHandler<&'static str>,
) -> Element {
    let kind = keypad::kind_of(label);
    let (button_type, outline) = match kind {
        Some(KeyKind::Operator) => (ButtonType::Secondary, true),
        Some(KeyKind::Command) => (ButtonType::Contrast, false),
        Some(KeyKind::Currency(_)) => (ButtonType::Secondary, false),
        _ => (ButtonType::Primary, false),
    };
    let title = match kind {
        Some(KeyKind::Currency(currency)) => format!("Convert to {}", currency.name()),
        _ => String::new(),
    };

    rsx! {
        div {
            class: "cell",
            Button {
                button_type,
                outline,
                disabled,
                title,
                on_click: move |_| on_press.call(label),
                "{label}"
            }
        }
    }
}

/// The calculator. Keeps its own state; reads rates from context.
#[component]
pub fn Calculator() -> Element {
    let state = use_signal(CalculatorState::default);
    let rates = use_exchange_rates();

    let display = state.read().display();
    let enabled: Vec<bool> = keypad::BUTTON_LABELS
        .iter()
        .map(|label| keypad::is_enabled(label, rates.read().as_ref()))
        .collect();

    rsx! {
        Card {
            div {
                id: "calculator",
                tabindex: "0",
                onkeydown: move |evt: KeyboardEvent| {
                    if let Some(label) = keypad::label_for_key(&evt.key().to_string()) {
                        evt.prevent_default();
                        press(state, rates, label);
                    }
                },
                div {
                    class: "cell",
                    id: "result-holder",
                    input {
                        r#type: "text",
                        id: "result",
                        value: "{display}",
                        readonly: true,
                    }
                }
                for (label, enabled) in keypad::BUTTON_LABELS.into_iter().zip(enabled) {
                    KeyButton {
                        key: "{label}",
                        label,
                        disabled: !enabled,
                        on_press: move |label: &'static str| press(state, rates, label),
                    }
                }
            }
            RatesPanel {}
        }
    }
}
