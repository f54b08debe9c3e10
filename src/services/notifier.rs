use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait NotifierService: Send + Sync {
    /// Delivers a markdown message body to the chat webhook.
    async fn deliver(&self, content: &str) -> AppResult<()>;
}
