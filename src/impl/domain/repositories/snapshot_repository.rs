use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::ReportSnapshot;

#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    fn from_string(&self, snapshot_json: &str) -> Result<ReportSnapshot, ServerError>;

    async fn from_file<P>(&self, snapshot_json: P) -> Result<ReportSnapshot, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
