use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::snapshot_model::SnapshotModel,
    entities::ReportSnapshot,
    errors::{InvalidJson, ReadError},
};

#[async_trait]
pub(crate) trait SnapshotJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<ReportSnapshot, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<ReportSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct SnapshotJsonDatasourceImpl;

impl SnapshotJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SnapshotJsonDatasource for SnapshotJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<ReportSnapshot, ServerError> {
        let model: SnapshotModel =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("ReportSnapshot", &e))?;
        tracing::trace!(
            reports = model.reports.len(),
            policies = model.policies.len(),
            transactions = model.transactions.len(),
            report_actions = model.report_actions.len(),
            "parsed snapshot"
        );
        ReportSnapshot::try_from(model)
    }

    async fn from_file<P>(&self, path: P) -> Result<ReportSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&contents)
    }
}
