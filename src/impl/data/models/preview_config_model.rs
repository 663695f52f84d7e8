use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::PreviewConfig, errors::InvalidJson};

use super::currency_code_model::CurrencyCodeModel;

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreviewConfigModel {
    pub default_currency: Option<CurrencyCodeModel>,
}

impl Into<PreviewConfig> for PreviewConfigModel {
    fn into(self) -> PreviewConfig {
        let defaults = PreviewConfig::default();
        PreviewConfig {
            default_currency: self
                .default_currency
                .map_or(defaults.default_currency, Into::into),
        }
    }
}

impl FromStr for PreviewConfig {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let model: PreviewConfigModel =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("PreviewConfig", &e))?;
        Ok(model.into())
    }
}
