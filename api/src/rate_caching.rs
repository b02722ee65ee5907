//! Handles the fetch-once caching of provider rate tables.

use crate::exchange_rates::ExchangeRates;
use crate::rate_providers::RateProvider;
use crate::ApiError;
use tokio::sync::OnceCell;

/// Holds the first rate table fetched successfully.
///
/// Rates are for a single historical date, so they never go stale and are
/// kept for the life of the process. A failed fetch is not cached; the next
/// caller tries the provider again.
#[derive(Debug, Default)]
pub struct RateCache {
    rates: OnceCell<ExchangeRates>,
}

impl RateCache {
    pub const fn new() -> Self {
        Self {
            rates: OnceCell::const_new(),
        }
    }

    /// Returns the cached table, fetching it from `provider` if none is held.
    ///
    /// Concurrent callers wait on the same fetch instead of issuing their own.
    pub async fn get_or_fetch<P: RateProvider>(
        &self,
        provider: &P,
    ) -> Result<ExchangeRates, ApiError> {
        self.rates
            .get_or_try_init(|| provider.get_rates())
            .await
            .cloned()
    }
}

/// Retrieves rates from `provider` through the process-wide cache.
pub async fn get_cached_rates<P: RateProvider>(provider: &P) -> Result<ExchangeRates, ApiError> {
    static CACHE: RateCache = RateCache::new();
    CACHE.get_or_fetch(provider).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiat_currency::FiatCurrency;
    use crate::rate_providers::nbp::Nbp;
    use chrono::NaiveDate;

    const TABLE: &str = r#"[{"table":"A","no":"197/A/NBP/2023","effectiveDate":"2023-10-12",
        "rates":[{"currency":"funt szterling","code":"GBP","mid":5.2147}]}]"#;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 12).unwrap()
    }

    #[tokio::test]
    async fn fetches_only_once_after_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/2023-10-12/")
            .with_status(200)
            .with_body(TABLE)
            .expect(1)
            .create_async()
            .await;

        let cache = RateCache::new();
        let provider = Nbp::new(server.url(), date());
        let first = cache.get_or_fetch(&provider).await.unwrap();
        let second = cache.get_or_fetch(&provider).await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
        assert_eq!(second.get(FiatCurrency::GBP), Some(5.2147));
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/2023-10-12/")
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        let cache = RateCache::new();
        let provider = Nbp::new(server.url(), date());
        assert!(cache.get_or_fetch(&provider).await.is_err());
        assert!(cache.get_or_fetch(&provider).await.is_err());

        mock.assert_async().await;
    }
}
