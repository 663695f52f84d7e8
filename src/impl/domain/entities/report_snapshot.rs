use std::collections::{HashMap, HashSet};

use fractic_server_error::ServerError;

use crate::errors::DuplicateSnapshotEntry;

use super::{
    ids::{PolicyId, ReportId},
    policy::Policy,
    report::Report,
    report_action::ReportAction,
    transaction::Transaction,
};

fn ensure_unique<'a>(
    entity: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ServerError> {
    let mut seen = HashSet::new();
    ids.into_iter().try_for_each(|id| {
        if seen.insert(id) {
            Ok(())
        } else {
            Err(DuplicateSnapshotEntry::new(entity, id))
        }
    })
}

/// Point-in-time, read-only copy of the report state known to the client.
#[derive(Debug, Clone, Default)]
pub struct ReportSnapshot {
    pub(crate) reports: HashMap<ReportId, Report>,
    pub(crate) policies: HashMap<PolicyId, Policy>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) report_actions: Vec<ReportAction>,
}

impl ReportSnapshot {
    /// Fails with `DuplicateSnapshotEntry` if two reports, policies,
    /// transactions or report actions share an ID.
    pub fn new(
        reports: Vec<Report>,
        policies: Vec<Policy>,
        transactions: Vec<Transaction>,
        report_actions: Vec<ReportAction>,
    ) -> Result<Self, ServerError> {
        ensure_unique("report", reports.iter().map(|r| r.report_id.as_str()))?;
        ensure_unique("policy", policies.iter().map(|p| p.policy_id.as_str()))?;
        ensure_unique(
            "transaction",
            transactions.iter().map(|t| t.transaction_id.as_str()),
        )?;
        ensure_unique(
            "report action",
            report_actions.iter().map(|a| a.report_action_id.as_str()),
        )?;

        Ok(Self {
            reports: reports
                .into_iter()
                .map(|r| (r.report_id.clone(), r))
                .collect(),
            policies: policies
                .into_iter()
                .map(|p| (p.policy_id.clone(), p))
                .collect(),
            transactions,
            report_actions,
        })
    }

    pub fn report(&self, report_id: &ReportId) -> Option<&Report> {
        self.reports.get(report_id)
    }

    pub fn policy(&self, policy_id: &PolicyId) -> Option<&Policy> {
        self.policies.get(policy_id)
    }

    /// Policy the report belongs to, if both are known.
    pub fn policy_for(&self, report: Option<&Report>) -> Option<&Policy> {
        report
            .and_then(|r| r.policy_id.as_ref())
            .and_then(|id| self.policy(id))
    }

    /// Transactions attached to the given report, in snapshot order.
    pub fn report_transactions<'a>(
        &'a self,
        report_id: Option<&ReportId>,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        let report_id = report_id.cloned();
        self.transactions
            .iter()
            .filter(move |t| report_id.as_ref().is_some_and(|id| t.belongs_to(id)))
    }

    /// Actions posted on the given report, in snapshot order.
    pub fn report_actions<'a>(
        &'a self,
        report_id: &ReportId,
    ) -> impl Iterator<Item = &'a ReportAction> + 'a {
        let report_id = report_id.clone();
        self.report_actions
            .iter()
            .filter(move |a| a.report_id.as_ref() == Some(&report_id))
    }

    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.reports.values()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
