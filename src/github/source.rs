use async_trait::async_trait;

use crate::error::Result;
use crate::models::Repository;

/// Seam between the merge pipeline and the repository listing backend, so
/// the pipeline can be driven by a stub in tests.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn fetch_repos(&self, account: &str) -> Result<Vec<Repository>>;
}
