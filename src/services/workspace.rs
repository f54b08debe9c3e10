use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait WorkspaceService: Send + Sync {
    /// Full text of a repository-relative path in the checked-out tree.
    async fn read_to_string(&self, path: &str) -> AppResult<String>;
}
