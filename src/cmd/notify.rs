use std::sync::Arc;

use clap::Args;

use crate::config::{ActionInputs, AppConfig};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::fs::LocalWorkspace;
use crate::infra::git::GitCli;
use crate::infra::wechat::WeChatWebhook;
use crate::services::NotifierService;
use crate::workflow::notify::{NotifyMode, NotifyOutcome, notify_changes};

#[derive(Args, Debug, Clone)]
pub struct NotifyArgs {
    #[command(flatten)]
    pub inputs: ActionInputs,

    /// Print the rendered message instead of sending it.
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: NotifyArgs) -> AppResult<NotifyOutcome> {
    let mode = if args.dry_run {
        NotifyMode::Preview
    } else {
        NotifyMode::Send
    };
    let config = AppConfig::from_inputs(args.inputs, mode == NotifyMode::Send)?;

    let git = Arc::new(GitCli::new(config.workspace_root.clone(), config.timeout));
    let workspace = Arc::new(LocalWorkspace::new(config.workspace_root.clone()));
    let notifier: Option<Arc<dyn NotifierService>> = match (&config.webhook_url, mode) {
        (Some(url), NotifyMode::Send) => {
            Some(Arc::new(WeChatWebhook::new(url.clone(), config.timeout)?))
        }
        _ => None,
    };

    let context = AppContext::new(config, git, workspace, notifier);
    notify_changes(&context, mode).await
}
