use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{
            action_selector::select_action, amount_resolver::resolve_amount,
            feed_visibility::is_visible_in_feed, thread_lookup::thread_report_ids,
        },
        usecases::load_snapshot_usecase::{LoadSnapshotUsecase as _, LoadSnapshotUsecaseImpl},
    },
    entities::{
        EligibilityFlags, PreviewConfig, ReportAction, ReportId, ReportPreview, ReportSnapshot,
        Transaction,
    },
    presentation::display_amount_fmt::DisplayAmountFormatter,
};

pub struct ReportPreviewUtil {
    load_snapshot_usecase: LoadSnapshotUsecaseImpl,
    formatter: DisplayAmountFormatter,
}

impl ReportPreviewUtil {
    pub fn new() -> Self {
        Self::with_config(PreviewConfig::default())
    }

    pub fn with_config(config: PreviewConfig) -> Self {
        Self {
            load_snapshot_usecase: LoadSnapshotUsecaseImpl::new(),
            formatter: DisplayAmountFormatter::new(config.default_currency),
        }
    }

    pub async fn from_string(&self, snapshot_json: &str) -> Result<ReportSnapshot, ServerError> {
        self.load_snapshot_usecase.from_string(snapshot_json).await
    }

    pub async fn from_file<T>(&self, snapshot_json: T) -> Result<ReportSnapshot, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.load_snapshot_usecase.from_file(snapshot_json).await
    }

    /// Primary action and amount for a report in the snapshot. Unknown reports
    /// (ex. still loading) resolve against missing data instead of failing.
    pub fn preview(
        &self,
        snapshot: &ReportSnapshot,
        report_id: &ReportId,
        flags: &EligibilityFlags,
    ) -> ReportPreview {
        let report = snapshot.report(report_id);
        let policy = snapshot.policy_for(report);
        let action = select_action(flags);
        let amount = resolve_amount(report, policy, action, snapshot, &self.formatter);
        tracing::debug!(%report_id, %action, amount = %amount, "resolved report preview");
        ReportPreview { action, amount }
    }

    /// Thread report IDs of the report's transactions, in snapshot order.
    pub fn thread_report_ids(
        &self,
        snapshot: &ReportSnapshot,
        report_id: &ReportId,
    ) -> Vec<ReportId> {
        let actions: Vec<ReportAction> = snapshot.report_actions(report_id).cloned().collect();
        let transactions: Vec<Transaction> = snapshot
            .report_transactions(Some(report_id))
            .cloned()
            .collect();
        thread_report_ids(&actions, &transactions)
    }

    /// Actions of the report that belong in its message feed.
    pub fn visible_actions<'a>(
        &self,
        snapshot: &'a ReportSnapshot,
        report_id: &ReportId,
    ) -> Vec<&'a ReportAction> {
        snapshot
            .report_actions(report_id)
            .filter(|action| is_visible_in_feed(action))
            .collect()
    }
}

impl Default for ReportPreviewUtil {
    fn default() -> Self {
        Self::new()
    }
}
