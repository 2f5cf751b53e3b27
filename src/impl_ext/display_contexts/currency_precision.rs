use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::DisplayContext;

/// Formats numbers with the standard number of decimal places for their
/// ISO 4217 currency (ex. JPY = 0, USD = 2), optionally with thousands
/// separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of the currency. Commodities that are not ISO currencies
/// (stocks, points, ...) keep the precision they were written with.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyPrecisionContext {
    pub thousands_separator: bool,
}

impl CurrencyPrecisionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thousands_separator(mut self) -> Self {
        self.thousands_separator = true;
        self
    }

    fn group_thousands(&self, number: &Decimal) -> String {
        let plain = number.abs().to_string();
        let (integer_part, fractional_part) = match plain.split_once('.') {
            Some((integer_part, fractional_part)) => (integer_part, Some(fractional_part)),
            None => (plain.as_str(), None),
        };
        let grouped = integer_part
            .parse::<u128>()
            .map(|n| n.to_formatted_string(&Locale::en))
            .unwrap_or_else(|_| integer_part.to_string());
        let sign = if number.is_sign_negative() && !number.is_zero() {
            "-"
        } else {
            ""
        };
        match fractional_part {
            Some(fractional_part) => format!("{}{}.{}", sign, grouped, fractional_part),
            None => format!("{}{}", sign, grouped),
        }
    }
}

impl DisplayContext for CurrencyPrecisionContext {
    fn format_number(&self, number: &Decimal, currency: &str) -> String {
        let number = self.display_value(number, currency);
        if self.thousands_separator {
            self.group_thousands(&number)
        } else {
            number.to_string()
        }
    }

    fn display_value(&self, number: &Decimal, currency: &str) -> Decimal {
        match Currency::from_code(currency) {
            Some(currency) => {
                let decimal_places = currency.exponent().unwrap_or(0) as u32;
                let mut rounded = number.round_dp_with_strategy(
                    decimal_places,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                rounded.rescale(decimal_places);
                rounded
            }
            None => *number,
        }
    }
}
