use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::snapshot_repository_impl::SnapshotRepositoryImpl,
    domain::repositories::snapshot_repository::SnapshotRepository, entities::ReportSnapshot,
};

#[async_trait]
pub trait LoadSnapshotUsecase: Send + Sync {
    async fn from_string(&self, snapshot_json: &str) -> Result<ReportSnapshot, ServerError>;

    async fn from_file<P>(&self, snapshot_json: P) -> Result<ReportSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadSnapshotUsecaseImpl<
    R1 = SnapshotRepositoryImpl, // Default.
> where
    R1: SnapshotRepository,
{
    snapshot_repository: R1,
}

#[async_trait]
impl<R1> LoadSnapshotUsecase for LoadSnapshotUsecaseImpl<R1>
where
    R1: SnapshotRepository,
{
    async fn from_string(&self, snapshot_json: &str) -> Result<ReportSnapshot, ServerError> {
        let snapshot = self.snapshot_repository.from_string(snapshot_json)?;
        tracing::debug!(
            reports = snapshot.reports().count(),
            transactions = snapshot.transactions().len(),
            "loaded report snapshot from string"
        );
        Ok(snapshot)
    }

    async fn from_file<P>(&self, snapshot_json: P) -> Result<ReportSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = snapshot_json.as_ref().display().to_string();
        let snapshot = self.snapshot_repository.from_file(snapshot_json).await?;
        tracing::debug!(
            path = %path,
            reports = snapshot.reports().count(),
            transactions = snapshot.transactions().len(),
            "loaded report snapshot from file"
        );
        Ok(snapshot)
    }
}

impl LoadSnapshotUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadSnapshotUsecaseImpl {
            snapshot_repository: SnapshotRepositoryImpl::new(),
        }
    }
}
