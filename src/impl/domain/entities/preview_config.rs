use iso_currency::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Currency used to display amounts of reports without a currency.
    pub default_currency: Currency,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::USD,
        }
    }
}
