//! Provides a specialized map for storing mid-rates of foreign currencies.

use crate::fiat_currency::FiatCurrency;
use chrono::NaiveDate;
use std::collections::HashMap;

/// The mid-rates of one rate table, quoted in PLN per one unit of currency.
///
/// An empty set means rates are unavailable, either because the fetch failed
/// or because the table did not list any supported currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRates {
    rates: HashMap<FiatCurrency, f64>,
    table_no: Option<String>,
    effective_date: Option<NaiveDate>,
}

impl ExchangeRates {
    /// Creates a new, empty `ExchangeRates`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the table number and effective date reported by the source.
    pub fn with_table(mut self, table_no: impl Into<String>, effective_date: NaiveDate) -> Self {
        self.table_no = Some(table_no.into());
        self.effective_date = Some(effective_date);
        self
    }

    /// Inserts or updates the mid-rate for a given currency.
    ///
    /// If the set previously contained a rate for the currency, the old
    /// value is returned.
    pub fn insert(&mut self, currency: FiatCurrency, mid: f64) -> Option<f64> {
        self.rates.insert(currency, mid)
    }

    /// Retrieves the mid-rate for a specific currency.
    ///
    /// Returns `None` if the rate for the requested currency is not available.
    pub fn get(&self, currency: FiatCurrency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn table_no(&self) -> Option<&str> {
        self.table_no.as_deref()
    }

    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.effective_date
    }
}
