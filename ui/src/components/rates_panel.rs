#![allow(non_snake_case)]

use api::exchange_rates::ExchangeRates;
use api::fiat_currency::FiatCurrency;
use dioxus::prelude::*;

use crate::hooks::use_exchange_rates::use_exchange_rates;

/// "NBP table 197/A/NBP/2023, 2023-10-12", or just "NBP table".
fn table_heading(rates: &ExchangeRates) -> String {
    match (rates.table_no(), rates.effective_date()) {
        (Some(no), Some(date)) => format!("NBP table {}, {}", no, date),
        _ => "NBP table".to_string(),
    }
}

/// How much local money the sample conversion on each line uses.
const SAMPLE_AMOUNT: f64 = 100.0;

/// One line per loaded rate, in keypad order, e.g.
/// "1 GBP = 5.2147 zł (zł100.00 = £19.18)".
fn rate_lines(rates: &ExchangeRates) -> Vec<String> {
    let local = FiatCurrency::PLN;
    FiatCurrency::CONVERTIBLE
        .into_iter()
        .filter_map(|currency| {
            rates.get(currency).map(|mid| {
                format!(
                    "1 {} = {} {} ({} = {})",
                    currency.code(),
                    mid,
                    local.symbol(),
                    local.format_amount(SAMPLE_AMOUNT),
                    currency.format_amount(SAMPLE_AMOUNT / mid)
                )
            })
        })
        .collect()
}

/// Shows the mid-rates the currency keys convert with.
#[component]
pub fn RatesPanel() -> Element {
    let rates = use_exchange_rates();

    let (heading, lines) = match &*rates.read() {
        None => {
            return rsx! {
                p { class: "rates-status", "Loading exchange rates..." }
            }
        }
        Some(rates) if rates.is_empty() => {
            return rsx! {
                p { class: "rates-status", "Exchange rates unavailable" }
            }
        }
        Some(rates) => (table_heading(rates), rate_lines(rates)),
    };

    rsx! {
        footer {
            small { "{heading}" }
            ul {
                class: "rates-list",
                for line in lines {
                    li { key: "{line}", "{line}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn lines_follow_keypad_order() {
        let mut rates = ExchangeRates::new();
        rates.insert(FiatCurrency::USD, 4.2456);
        rates.insert(FiatCurrency::GBP, 5.2147);
        assert_eq!(
            rate_lines(&rates),
            vec![
                "1 GBP = 5.2147 zł (zł100.00 = £19.18)",
                "1 USD = 4.2456 zł (zł100.00 = $23.55)"
            ]
        );
    }

    #[test]
    fn heading_includes_table_when_known() {
        assert_eq!(table_heading(&ExchangeRates::new()), "NBP table");
        let date = NaiveDate::from_ymd_opt(2023, 10, 12).unwrap();
        let rates = ExchangeRates::new().with_table("197/A/NBP/2023", date);
        assert_eq!(table_heading(&rates), "NBP table 197/A/NBP/2023, 2023-10-12");
    }
}
