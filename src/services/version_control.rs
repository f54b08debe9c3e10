use async_trait::async_trait;

use crate::domain::change::{ChangeCategory, RevisionRange};
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Paths changed between the two revisions with the given operation
    /// code, in the tool's native order.
    async fn changed_paths(
        &self,
        range: &RevisionRange,
        category: ChangeCategory,
    ) -> AppResult<Vec<String>>;

    /// Commit id `revision` resolves to, or `None` if it names no commit.
    async fn resolve_revision(&self, revision: &str) -> AppResult<Option<String>>;

    /// Whether `revision` is a commit without parents.
    async fn is_root_commit(&self, revision: &str) -> AppResult<bool>;

    /// Content of `path` as it was at `revision`.
    async fn show_file(&self, revision: &str, path: &str) -> AppResult<String>;

    async fn commit_message(&self, revision: &str) -> AppResult<String>;
}
