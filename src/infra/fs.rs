use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::services::WorkspaceService;

pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl WorkspaceService for LocalWorkspace {
    async fn read_to_string(&self, path: &str) -> AppResult<String> {
        tokio::fs::read_to_string(self.root.join(path))
            .await
            .map_err(|err| AppError::read(path, err))
    }
}
