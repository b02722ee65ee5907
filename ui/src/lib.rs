// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
pub mod calculator;
mod components;
pub mod hooks;

use app_state_mut::AppStateMut;
use components::calculator::Calculator;
use components::pico::Container;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let calculator_css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        background-color: var(--pico-muted-border-color);
    }

    .app-main-container {
        display: flex;
        justify-content: center;
        padding: 10px;
    }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* --- KEYPAD --- */
    #calculator {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 0.5rem;
        max-width: 360px;
        outline: none;
    }

    #calculator .cell button {
        width: 100%;
        margin: 0;
    }

    /* result field spans the full row */
    #result-holder { grid-column: 1 / -1; }
    #result-holder input {
        text-align: right;
        font-family: monospace;
        font-size: 1.5rem;
        margin: 0;
    }

    .rates-list {
        margin: 0.5rem 0 0 0;
        padding: 0;
        list-style: none;
        font-size: 0.875rem;
    }
    .rates-list li { list-style: none; }
    .rates-status { color: var(--pico-muted-color); font-size: 0.875rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{calculator_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Create the signal at the top level and provide it to the tree.
    let rates_signal = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        rates: rates_signal,
    });
    // Get a handle to the mutable state to populate it.
    let mut app_state_mut = use_context::<AppStateMut>();

    // Runs once on mount. Nothing restarts it; the table is for a fixed date.
    let rates_resource = use_resource(move || async move { api::exchange_rates().await });

    use_effect(move || {
        if let Some(rates) = rates_resource.read().as_ref() {
            // This check prevents infinite loops if the resource returns the same data.
            if app_state_mut.rates.peek().as_ref() != Some(rates) {
                app_state_mut.rates.set(Some(rates.clone()));
            }
        }
    });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Calculator"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    Calculator {}
                }
            }
        }
    }
}
