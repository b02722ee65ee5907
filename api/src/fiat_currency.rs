//! Defines the fiat currencies supported by the calculator.

/// Represents a fiat currency, with its ISO code, symbol and name.
///
/// `PLN` is the local currency that rate tables are quoted in. The others are
/// the foreign currencies a result can be converted into.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    EUR, // Euro
    GBP, // Great British Pound
    #[default]
    PLN, // Polish Złoty
    USD, // United States Dollar
}

impl FiatCurrency {
    /// The foreign currencies offered on the keypad, in keypad order.
    pub const CONVERTIBLE: [FiatCurrency; 3] = [Self::GBP, Self::EUR, Self::USD];

    /// Returns the number of decimal digits used by the currency.
    ///
    /// All supported currencies use 2 decimal places.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::EUR | Self::GBP | Self::PLN | Self::USD => 2,
        }
    }

    /// Formats `amount` rounded to the currency's decimals, with its symbol
    /// (e.g., "£19.18").
    pub fn format_amount(&self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.symbol(),
            self.decimals() as usize,
            amount
        )
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::GBP => "£",
            Self::PLN => "zł",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::PLN => "Polish Złoty",
            Self::USD => "United States Dollar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(FiatCurrency::from_str("gbp"), Ok(FiatCurrency::GBP));
        assert_eq!(FiatCurrency::from_str("EUR"), Ok(FiatCurrency::EUR));
        assert!(FiatCurrency::from_str("CHF").is_err());
    }

    #[test]
    fn local_currency_is_default_and_not_convertible() {
        assert_eq!(FiatCurrency::default(), FiatCurrency::PLN);
        assert!(!FiatCurrency::CONVERTIBLE.contains(&FiatCurrency::PLN));
    }

    #[test]
    fn code_symbol_and_name() {
        assert_eq!(FiatCurrency::USD.code(), "USD");
        assert_eq!(FiatCurrency::PLN.symbol(), "zł");
        assert_eq!(FiatCurrency::GBP.name(), "Great British Pound");
    }

    #[test]
    fn format_amount_rounds_to_decimals() {
        assert_eq!(FiatCurrency::GBP.decimals(), 2);
        assert_eq!(FiatCurrency::GBP.format_amount(100.0 / 5.2147), "£19.18");
        assert_eq!(FiatCurrency::USD.format_amount(4.0), "$4.00");
        assert_eq!(FiatCurrency::EUR.format_amount(2.005_1), "€2.01");
    }
}
