use chrono::NaiveDate;
use std::env;

/// Where the calculator's rate table comes from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RateSource {
    /// Base URL of the NBP table-A endpoint, without the date segment.
    base_url: String,
    /// The single historical date whose table is used.
    date: NaiveDate,
}

impl RateSource {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.nbp.pl/api/exchangerates/tables/a";
    pub const DEFAULT_DATE: &'static str = "2023-10-12";

    pub fn new(base_url: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            base_url: base_url.into(),
            date,
        }
    }

    /// Creates a RateSource instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables:
    /// - `NBP_API_URL`: base URL of the rate table endpoint.
    /// - `NBP_RATES_DATE`: table date as `YYYY-MM-DD`. Unparsable values
    ///   fall back to the default date.
    ///
    /// On wasm32 there is no process environment, so the defaults apply.
    pub fn from_env() -> Self {
        let base_url = env::var("NBP_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let date = env::var("NBP_RATES_DATE")
            .ok()
            .and_then(|s| parse_date(&s))
            .unwrap_or_else(default_date);

        Self::new(base_url, date)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Default for RateSource {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn default_date() -> NaiveDate {
    // DEFAULT_DATE always parses.
    parse_date(RateSource::DEFAULT_DATE).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_date_matches_constant() {
        assert_eq!(
            default_date(),
            NaiveDate::from_ymd_opt(2023, 10, 12).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(
            parse_date(" 2024-01-31 "),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    // The only test touching these variables, so it cannot race another.
    #[test]
    fn env_overrides_defaults() {
        env::set_var("NBP_API_URL", "http://localhost:8080/tables/a");
        env::set_var("NBP_RATES_DATE", "2024-02-29");
        let source = RateSource::from_env();
        assert_eq!(source.base_url(), "http://localhost:8080/tables/a");
        assert_eq!(source.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        env::set_var("NBP_RATES_DATE", "not-a-date");
        assert_eq!(RateSource::from_env().date(), default_date());

        env::remove_var("NBP_API_URL");
        env::remove_var("NBP_RATES_DATE");
        let source = RateSource::from_env();
        assert_eq!(source.base_url(), RateSource::DEFAULT_BASE_URL);
        assert_eq!(source.date(), default_date());
    }

    #[test]
    fn explicit_source_keeps_values() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let source = RateSource::new("http://localhost:1234", date);
        assert_eq!(source.base_url(), "http://localhost:1234");
        assert_eq!(source.date(), date);
    }
}
