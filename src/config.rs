use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use tracing::warn;

use crate::domain::change::RevisionRange;
use crate::domain::notification::CommitContext;
use crate::domain::template::MessageTemplate;
use crate::error::{AppError, AppResult};

pub const DEFAULT_EMPTY_TEXT: &str = "no changes in this category";

/// Run inputs. Each one can come from a flag or from the environment
/// variable the CI action runtime sets for it.
#[derive(Args, Debug, Clone, Default)]
pub struct ActionInputs {
    /// Chat robot webhook URL.
    #[arg(long = "webhook", env = "INPUT_WECHAT_WEBHOOK", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Public site root used to build document links.
    #[arg(long, env = "INPUT_BASE_URL", default_value = "")]
    pub base_url: String,

    /// Directory holding the documents, relative to the repository root.
    #[arg(long, env = "INPUT_BLOG_DIR", default_value = "blog")]
    pub blog_dir: String,

    /// Message template with `${name}` placeholders.
    #[arg(long, env = "INPUT_MESSAGE_TEMPLATE")]
    pub template: Option<String>,

    /// Only files with this extension are reported.
    #[arg(long, env = "INPUT_EXTENSION", default_value = ".md")]
    pub extension: String,

    /// Revision to diff from.
    #[arg(long = "from", env = "INPUT_FROM_REF", default_value = "HEAD^")]
    pub from_ref: String,

    /// Revision to diff to.
    #[arg(long = "to", env = "INPUT_TO_REF", default_value = "HEAD")]
    pub to_ref: String,

    /// Text shown for a category with no changes.
    #[arg(long, env = "INPUT_EMPTY_TEXT", default_value = DEFAULT_EMPTY_TEXT)]
    pub empty_text: String,

    /// Timeout for each git call and the webhook request.
    #[arg(long, env = "INPUT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, env = "GITHUB_REF_NAME", default_value = "")]
    pub branch: String,

    #[arg(long, env = "GITHUB_ACTOR", default_value = "")]
    pub actor: String,

    /// Overrides the message read from the `to` revision.
    #[arg(long)]
    pub commit_message: Option<String>,

    /// Repository checkout; defaults to the current directory.
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: Option<String>,
    pub base_url: String,
    pub blog_dir: String,
    pub extension: String,
    pub template: MessageTemplate,
    pub custom_template: bool,
    pub empty_text: String,
    pub range: RevisionRange,
    pub timeout: Duration,
    pub branch: String,
    pub actor: String,
    pub commit_message: Option<String>,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    /// Validates the inputs. The webhook may only be absent when nothing
    /// will be sent.
    pub fn from_inputs(inputs: ActionInputs, require_webhook: bool) -> AppResult<Self> {
        let webhook_url = inputs
            .webhook_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if require_webhook && webhook_url.is_none() {
            return Err(AppError::Configuration(
                "wechat_webhook is required".to_string(),
            ));
        }

        let workspace_root = match inputs.workspace {
            Some(path) => path,
            None => std::env::current_dir()?,
        };

        let custom_template = inputs
            .template
            .as_deref()
            .is_some_and(|source| !source.trim().is_empty());
        let template = match inputs.template.as_deref() {
            Some(source) if custom_template => MessageTemplate::parse(source),
            _ => MessageTemplate::default(),
        };
        for name in template.unknown_placeholders() {
            warn!(placeholder = %name, "unknown template placeholder will be sent as written");
        }

        if inputs.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            webhook_url,
            base_url: inputs.base_url.trim().to_string(),
            blog_dir: normalize_blog_dir(&inputs.blog_dir),
            extension: normalize_extension(&inputs.extension),
            template,
            custom_template,
            empty_text: inputs.empty_text,
            range: RevisionRange::new(inputs.from_ref.trim(), inputs.to_ref.trim()),
            timeout: Duration::from_secs(inputs.timeout_secs),
            branch: inputs.branch,
            actor: inputs.actor,
            commit_message: inputs.commit_message,
            workspace_root,
        })
    }

    /// Commit facts known without asking version control.
    pub fn commit_context(&self, commit_message: String) -> CommitContext {
        CommitContext {
            branch: self.branch.clone(),
            commit_message,
            actor: self.actor.clone(),
        }
    }
}

fn normalize_blog_dir(dir: &str) -> String {
    dir.trim().trim_matches('/').to_string()
}

fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim();
    if extension.is_empty() || extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}
