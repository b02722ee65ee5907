//! This crate contains the currency model and the exchange-rate fetcher
//! shared by every calculator front end.

pub mod exchange_rates;
pub mod fiat_currency;
pub mod prefs;
pub mod rate_caching;
pub mod rate_providers;

use exchange_rates::ExchangeRates;
use prefs::rate_source::RateSource;
use prefs::user_prefs::UserPrefs;
use rate_providers::nbp::Nbp;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// There is no settings file; the defaults read from env vars.
pub fn get_user_prefs() -> UserPrefs {
    UserPrefs::default()
}

/// Fetches the rate table described by `source`, once per process.
pub async fn try_exchange_rates(source: &RateSource) -> Result<ExchangeRates, ApiError> {
    let provider = Nbp::new(source.base_url(), source.date());
    rate_caching::get_cached_rates(&provider).await
}

/// Fetches the configured rate table.
///
/// Any failure is logged and yields an empty `ExchangeRates`, which the
/// calculator treats as "rates unavailable".
pub async fn exchange_rates() -> ExchangeRates {
    let prefs = get_user_prefs();
    exchange_rates_or_empty(prefs.rate_source()).await
}

/// Fetches the table described by `source`, logging any failure and
/// returning an empty `ExchangeRates` in its place.
pub async fn exchange_rates_or_empty(source: &RateSource) -> ExchangeRates {
    match try_exchange_rates(source).await {
        Ok(rates) => rates,
        Err(e) => {
            dioxus_logger::tracing::warn!("failed to fetch exchange rates: {:#}", e);
            ExchangeRates::default()
        }
    }
}
