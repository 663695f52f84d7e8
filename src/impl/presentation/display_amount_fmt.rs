use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

use crate::entities::AmountFormatHandler;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format an amount given in minor units with the currency symbol, correct
/// number of decimal places and thousands separators (ex. -123456 USD ->
/// "-$1,234.56").
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency. Could be generalized in the future.
pub(crate) fn format_minor_units(amount: i64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let divisor = 10u64.pow(decimal_places);
    let magnitude = amount.unsigned_abs();
    let sign = if amount < 0 { "-" } else { "" };
    let integer_part = (magnitude / divisor).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!("{}{}{}", sign, currency.symbol(), integer_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol(),
            integer_part,
            magnitude % divisor,
            width = decimal_places as usize,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayAmountFormatter {
    default_currency: Currency,
}

impl DisplayAmountFormatter {
    pub fn new(default_currency: Currency) -> Self {
        Self { default_currency }
    }
}

impl Default for DisplayAmountFormatter {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

impl AmountFormatHandler for DisplayAmountFormatter {
    fn display_string(&self, amount: i64, currency: Option<Currency>) -> String {
        format_minor_units(amount, currency.unwrap_or(self.default_currency))
    }
}
