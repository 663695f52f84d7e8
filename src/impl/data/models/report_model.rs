use crate::entities::{PolicyId, Report, ReportId, ReportKind};

use super::currency_code_model::CurrencyCodeModel;

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportKindModel {
    Expense,
    Iou,
    Invoice,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PendingFieldsModel {
    pub create_chat: Option<String>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportModel {
    #[serde(rename = "reportID")]
    pub report_id: String,
    #[serde(rename = "policyID")]
    pub policy_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ReportKindModel,
    pub currency: Option<CurrencyCodeModel>,
    pub total: Option<i64>,
    pub non_reimbursable_total: Option<i64>,
    pub unheld_total: Option<i64>,
    pub unheld_non_reimbursable_total: Option<i64>,
    pub pending_fields: Option<PendingFieldsModel>,
}

impl Into<ReportKind> for ReportKindModel {
    fn into(self) -> ReportKind {
        match self {
            ReportKindModel::Expense => ReportKind::Expense,
            ReportKindModel::Iou => ReportKind::Iou,
            ReportKindModel::Invoice => ReportKind::Invoice,
        }
    }
}

impl Into<Report> for ReportModel {
    fn into(self) -> Report {
        Report {
            report_id: ReportId(self.report_id),
            policy_id: self.policy_id.filter(|id| !id.is_empty()).map(PolicyId),
            kind: self.kind.into(),
            currency: self.currency.map(Into::into),
            total: self.total,
            non_reimbursable_total: self.non_reimbursable_total,
            unheld_total: self.unheld_total,
            unheld_non_reimbursable_total: self.unheld_non_reimbursable_total,
            is_creating_chat: self
                .pending_fields
                .and_then(|fields| fields.create_chat)
                .is_some_and(|pending| !pending.is_empty()),
        }
    }
}
