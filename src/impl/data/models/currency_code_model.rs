use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde::Deserialize;

use crate::errors::InvalidIsoCurrencyCode;

#[derive(Debug)]
pub(crate) struct CurrencyCodeModel(Currency);
impl FromStr for CurrencyCodeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s.trim())
            .map(CurrencyCodeModel)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(s))
    }
}
impl<'de> Deserialize<'de> for CurrencyCodeModel {
    fn deserialize<D>(deserializer: D) -> Result<CurrencyCodeModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CurrencyCodeModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Into<Currency> for CurrencyCodeModel {
    fn into(self) -> Currency {
        self.0
    }
}
