use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::services::NotifierService;

/// WeChat Work group robot webhook.
pub struct WeChatWebhook {
    http: Client,
    webhook_url: String,
}

impl WeChatWebhook {
    pub fn new(webhook_url: String, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|err| {
            AppError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self { http, webhook_url })
    }
}

#[async_trait]
impl NotifierService for WeChatWebhook {
    async fn deliver(&self, content: &str) -> AppResult<()> {
        let response = self
            .http
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .json(&MarkdownMessage::new(content))
            .send()
            .await
            .map_err(|err| AppError::Delivery(format!("failed to call webhook: {err}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            AppError::Delivery(format!("failed to read webhook response ({status}): {err}"))
        })?;

        if !status.is_success() {
            return Err(AppError::Delivery(format!(
                "webhook responded with {status}: {body}"
            )));
        }

        // The robot answers 200 with a non-zero errcode for rejected messages;
        // a body without one is accepted.
        if let Ok(reply) = serde_json::from_str::<WebhookReply>(&body) {
            if reply.errcode != 0 {
                return Err(AppError::Delivery(format!(
                    "webhook rejected message (errcode {}): {}",
                    reply.errcode, reply.errmsg
                )));
            }
        }

        info!("notification delivered to webhook");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MarkdownMessage<'a> {
    msgtype: &'static str,
    markdown: MarkdownContent<'a>,
}

impl<'a> MarkdownMessage<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            msgtype: "markdown",
            markdown: MarkdownContent { content },
        }
    }
}

#[derive(Debug, Serialize)]
struct MarkdownContent<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct WebhookReply {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_markdown_payload() {
        let payload = serde_json::to_value(MarkdownMessage::new("**hi**")).expect("serialize");
        assert_eq!(
            payload,
            serde_json::json!({ "msgtype": "markdown", "markdown": { "content": "**hi**" } })
        );
    }
}
