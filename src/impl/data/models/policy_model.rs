use crate::entities::{Policy, PolicyId};

use super::currency_code_model::CurrencyCodeModel;

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PolicyModel {
    pub id: String,
    pub output_currency: Option<CurrencyCodeModel>,
}

impl Into<Policy> for PolicyModel {
    fn into(self) -> Policy {
        Policy {
            policy_id: PolicyId(self.id),
            output_currency: self.output_currency.map(Into::into),
        }
    }
}
