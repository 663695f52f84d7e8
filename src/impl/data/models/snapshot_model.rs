use fractic_server_error::ServerError;

use crate::entities::{Policy, Report, ReportAction, ReportSnapshot, Transaction};

use super::{
    policy_model::PolicyModel, report_action_model::ReportActionModel, report_model::ReportModel,
    transaction_model::TransactionModel,
};

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotModel {
    #[serde(default)]
    pub reports: Vec<ReportModel>,
    #[serde(default)]
    pub policies: Vec<PolicyModel>,
    #[serde(default)]
    pub transactions: Vec<TransactionModel>,
    #[serde(default)]
    pub report_actions: Vec<ReportActionModel>,
}

impl TryFrom<SnapshotModel> for ReportSnapshot {
    type Error = ServerError;

    fn try_from(model: SnapshotModel) -> Result<Self, Self::Error> {
        let reports: Vec<Report> = model.reports.into_iter().map(Into::into).collect();
        let policies: Vec<Policy> = model.policies.into_iter().map(Into::into).collect();
        let transactions: Vec<Transaction> =
            model.transactions.into_iter().map(Into::into).collect();
        let report_actions = model
            .report_actions
            .into_iter()
            .map(ReportAction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        ReportSnapshot::new(reports, policies, transactions, report_actions)
    }
}
