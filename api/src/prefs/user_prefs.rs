use super::rate_source::RateSource;

/// Represents all user prefs. Currently only the rate source.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct UserPrefs {
    rate_source: RateSource,
}

impl UserPrefs {
    pub fn rate_source(&self) -> &RateSource {
        &self.rate_source
    }
}
