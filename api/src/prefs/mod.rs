pub mod rate_source;
pub mod user_prefs;
