use tracing::info;

use crate::context::AppContext;
use crate::domain::notification::NotificationContext;
use crate::error::{AppError, AppResult};
use crate::workflow::compose::{ComposeSettings, compose_changes, is_checked_out};
use crate::workflow::scan::{PathFilter, scan_changes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyMode {
    Send,
    /// Render the message but do not dispatch it.
    Preview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    NoChanges,
    Previewed {
        message: String,
    },
    Delivered {
        added: usize,
        modified: usize,
        deleted: usize,
    },
}

/// Scans, composes, renders and (in [`NotifyMode::Send`]) dispatches one
/// notification. Nothing is rendered or sent when no document changed.
pub async fn notify_changes(ctx: &AppContext, mode: NotifyMode) -> AppResult<NotifyOutcome> {
    let config = &ctx.config;

    let filter = PathFilter::new(&config.blog_dir, &config.extension);
    let scan = scan_changes(ctx.version_control.as_ref(), &config.range, &filter).await?;

    let target_is_checkout = if scan.is_empty() {
        false
    } else {
        is_checked_out(ctx.version_control.as_ref(), &config.range.to).await?
    };
    let settings = ComposeSettings {
        base_url: &config.base_url,
        blog_dir: &config.blog_dir,
        extension: &config.extension,
        base_revision: &config.range.from,
        target_revision: &config.range.to,
        target_is_checkout,
    };
    let changes = compose_changes(
        ctx.version_control.as_ref(),
        ctx.workspace.as_ref(),
        &scan,
        &settings,
    )
    .await?;

    if changes.is_empty() {
        info!("no blog changes detected");
        return Ok(NotifyOutcome::NoChanges);
    }

    let commit_message = match &config.commit_message {
        Some(message) => message.clone(),
        None => ctx.version_control.commit_message(&config.range.to).await?,
    };

    let (added, modified, deleted) = (
        changes.added.len(),
        changes.modified.len(),
        changes.deleted.len(),
    );
    let context = NotificationContext::new(config.commit_context(commit_message), changes);
    let message = config.template.render(&context, &config.empty_text);

    if mode == NotifyMode::Preview {
        return Ok(NotifyOutcome::Previewed { message });
    }

    let notifier = ctx
        .notifier
        .as_ref()
        .ok_or_else(|| AppError::Configuration("wechat_webhook is required".to_string()))?;
    notifier.deliver(&message).await?;

    Ok(NotifyOutcome::Delivered {
        added,
        modified,
        deleted,
    })
}
