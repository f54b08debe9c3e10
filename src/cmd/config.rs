use clap::{Args, Subcommand};

use crate::config::{ActionInputs, AppConfig};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration (webhook masked).
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub inputs: ActionInputs,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show(args) => run_show(args),
    }
}

fn run_show(args: ShowArgs) -> AppResult<()> {
    let config = AppConfig::from_inputs(args.inputs, false)?;
    print!("{}", summary(&config));
    Ok(())
}

fn summary(config: &AppConfig) -> String {
    let lines = [
        ("Webhook", mask_secret(&config.webhook_url)),
        ("Base URL", display_value(&config.base_url)),
        ("Blog directory", display_value(&config.blog_dir)),
        ("Extension", display_value(&config.extension)),
        (
            "Revisions",
            format!("{}..{}", config.range.from, config.range.to),
        ),
        (
            "Template",
            if config.custom_template {
                "custom".to_string()
            } else {
                "default".to_string()
            },
        ),
        ("Empty category text", display_value(&config.empty_text)),
        ("Timeout", format!("{}s", config.timeout.as_secs())),
        ("Branch", display_value(&config.branch)),
        ("Actor", display_value(&config.actor)),
        ("Workspace", config.workspace_root.display().to_string()),
    ];

    lines
        .iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "<not set>".to_string()
    } else {
        value.to_string()
    }
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(secret) if secret.chars().count() > 6 => {
            let prefix: String = secret.chars().take(3).collect();
            let suffix: String = secret
                .chars()
                .rev()
                .take(3)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("{prefix}***{suffix}")
        }
        Some(secret) if !secret.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
