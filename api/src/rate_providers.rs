//! Defines traits and implementations for external exchange-rate providers.

use crate::exchange_rates::ExchangeRates;
use crate::fiat_currency::FiatCurrency;
use crate::ApiError;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// An error raised while turning a provider response into `ExchangeRates`.
#[derive(Error, Debug)]
pub enum RateError {
    /// The response was valid JSON but held no rate table.
    #[error("rate table response is empty")]
    EmptyResponse,
    /// The response body was not a rate table.
    #[error("malformed rate table: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A trait for any service that can provide mid-rates against PLN.
pub trait RateProvider {
    /// Fetches the rate table.
    async fn get_rates(&self) -> Result<ExchangeRates, ApiError>;
}

/// Provides rate tables from the National Bank of Poland API.
pub mod nbp {
    use super::*;
    use chrono::NaiveDate;

    /// One table as returned by `/api/exchangerates/tables/a/{date}/`.
    #[derive(Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    struct NbpTable {
        no: String,
        effective_date: NaiveDate,
        rates: Vec<NbpRate>,
    }

    #[derive(Deserialize, Debug)]
    struct NbpRate {
        code: String,
        mid: f64,
    }

    /// Parses an NBP table response body.
    ///
    /// The body is a JSON array; only its first table is used. Rates for
    /// currencies outside `FiatCurrency::CONVERTIBLE` are skipped, and a
    /// convertible currency the table does not list is simply absent.
    pub fn parse_tables(body: &str) -> Result<ExchangeRates, RateError> {
        let tables: Vec<NbpTable> = serde_json::from_str(body)?;
        let table = tables.into_iter().next().ok_or(RateError::EmptyResponse)?;

        let mut rates = ExchangeRates::new().with_table(table.no, table.effective_date);
        for rate in table.rates {
            let Ok(currency) = FiatCurrency::from_str(&rate.code) else {
                continue;
            };
            if FiatCurrency::CONVERTIBLE.contains(&currency) {
                rates.insert(currency, rate.mid);
            }
        }
        Ok(rates)
    }

    /// An implementation of the `RateProvider` trait for NBP table A.
    pub struct Nbp {
        base_url: String,
        date: NaiveDate,
    }

    impl Nbp {
        pub fn new(base_url: impl Into<String>, date: NaiveDate) -> Self {
            Self {
                base_url: base_url.into(),
                date,
            }
        }

        /// The table URL for the configured date, e.g.
        /// `https://api.nbp.pl/api/exchangerates/tables/a/2023-10-12/`.
        pub fn url(&self) -> String {
            format!(
                "{}/{}/",
                self.base_url.trim_end_matches('/'),
                self.date.format("%Y-%m-%d")
            )
        }
    }

    impl RateProvider for Nbp {
        async fn get_rates(&self) -> Result<ExchangeRates, ApiError> {
            let url = self.url();
            dioxus_logger::tracing::info!("fetching exchange rates from {}", url);

            let client = reqwest::Client::new();
            let body = client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            let rates = parse_tables(&body)?;
            dioxus_logger::tracing::info!(
                "loaded {} exchange rates, table {:?}",
                rates.len(),
                rates.table_no()
            );
            Ok(rates)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::nbp::{parse_tables, Nbp};
    use super::*;
    use chrono::NaiveDate;

    const TABLE: &str = r#"[{
        "table": "A",
        "no": "197/A/NBP/2023",
        "effectiveDate": "2023-10-12",
        "rates": [
            {"currency": "dolar amerykański", "code": "USD", "mid": 4.2456},
            {"currency": "euro", "code": "EUR", "mid": 4.5035},
            {"currency": "frank szwajcarski", "code": "CHF", "mid": 4.7032},
            {"currency": "funt szterling", "code": "GBP", "mid": 5.2147}
        ]
    }]"#;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 12).unwrap()
    }

    #[test]
    fn parses_first_table() {
        let rates = parse_tables(TABLE).unwrap();
        assert_eq!(rates.len(), 3);
        assert_eq!(rates.get(FiatCurrency::GBP), Some(5.2147));
        assert_eq!(rates.get(FiatCurrency::EUR), Some(4.5035));
        assert_eq!(rates.get(FiatCurrency::USD), Some(4.2456));
        assert_eq!(rates.table_no(), Some("197/A/NBP/2023"));
        assert_eq!(rates.effective_date(), Some(date()));
    }

    #[test]
    fn missing_currency_is_left_out() {
        let body = r#"[{"table":"A","no":"1/A/NBP/2023","effectiveDate":"2023-01-02",
            "rates":[{"currency":"euro","code":"EUR","mid":4.7}]}]"#;
        let rates = parse_tables(body).unwrap();
        assert_eq!(rates.get(FiatCurrency::EUR), Some(4.7));
        assert_eq!(rates.get(FiatCurrency::GBP), None);
    }

    #[test]
    fn empty_array_is_an_error() {
        assert!(matches!(parse_tables("[]"), Err(RateError::EmptyResponse)));
    }

    #[test]
    fn non_table_body_is_malformed() {
        assert!(matches!(
            parse_tables(r#"{"status": 404}"#),
            Err(RateError::Malformed(_))
        ));
    }

    #[test]
    fn url_has_trailing_slash() {
        let nbp = Nbp::new("https://api.nbp.pl/api/exchangerates/tables/a/", date());
        assert_eq!(
            nbp.url(),
            "https://api.nbp.pl/api/exchangerates/tables/a/2023-10-12/"
        );
    }

    #[tokio::test]
    async fn fetches_from_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/2023-10-12/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TABLE)
            .create_async()
            .await;

        let rates = Nbp::new(server.url(), date()).get_rates().await.unwrap();

        mock.assert_async().await;
        assert_eq!(rates.get(FiatCurrency::USD), Some(4.2456));
    }

    #[tokio::test]
    async fn http_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2023-10-12/")
            .with_status(404)
            .with_body("404 NotFound - Not Found - Brak danych")
            .create_async()
            .await;

        let result = Nbp::new(server.url(), date()).get_rates().await;
        assert!(result.is_err());
    }
}
