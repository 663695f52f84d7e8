use crate::entities::{ReportId, Transaction, TransactionId};

use super::currency_code_model::CurrencyCodeModel;

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CommentModel {
    pub hold: Option<String>,
}

/// Reimbursability is carried by the report totals, so the transaction-level
/// `reimbursable` key is not read.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionModel {
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    #[serde(rename = "reportID")]
    pub report_id: Option<String>,
    #[serde(default)]
    pub amount: i64,
    pub currency: Option<CurrencyCodeModel>,
    pub comment: Option<CommentModel>,
    pub pending_action: Option<String>,
}

impl Into<Transaction> for TransactionModel {
    fn into(self) -> Transaction {
        Transaction {
            transaction_id: TransactionId(self.transaction_id),
            report_id: self.report_id.filter(|id| !id.is_empty()).map(ReportId),
            amount: self.amount,
            currency: self.currency.map(Into::into),
            hold: self.comment.and_then(|c| c.hold),
            has_pending_action: self
                .pending_action
                .is_some_and(|action| !action.is_empty()),
        }
    }
}
