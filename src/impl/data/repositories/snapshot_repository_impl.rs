use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::snapshot_json_datasource::{
        SnapshotJsonDatasource, SnapshotJsonDatasourceImpl,
    },
    domain::repositories::snapshot_repository::SnapshotRepository,
    entities::ReportSnapshot,
};

pub(crate) struct SnapshotRepositoryImpl<
    DS1 = SnapshotJsonDatasourceImpl, // Default.
> where
    DS1: SnapshotJsonDatasource,
{
    snapshot_datasource: DS1,
}

#[async_trait]
impl<DS1> SnapshotRepository for SnapshotRepositoryImpl<DS1>
where
    DS1: SnapshotJsonDatasource,
{
    fn from_string(&self, snapshot_json: &str) -> Result<ReportSnapshot, ServerError> {
        self.snapshot_datasource.from_string(snapshot_json)
    }

    async fn from_file<P>(&self, snapshot_json: P) -> Result<ReportSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.snapshot_datasource.from_file(snapshot_json).await
    }
}

impl SnapshotRepositoryImpl {
    pub(crate) fn new() -> Self {
        Self {
            snapshot_datasource: SnapshotJsonDatasourceImpl::new(),
        }
    }
}
