use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use blog_notify::cmd::config::{self as config_cmd, ConfigArgs};
use blog_notify::cmd::notify::{self, NotifyArgs};
use blog_notify::error::AppResult;
use blog_notify::workflow::notify::NotifyOutcome;

#[derive(Parser)]
#[command(
    name = "blog-notify",
    author,
    version,
    about = "Send a chat digest of changed blog posts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect changed documents and notify the webhook.
    Notify(NotifyArgs),
    /// Inspect the resolved configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Notify(args) => run_notify(args).await,
    }
}

async fn run_notify(args: NotifyArgs) -> AppResult<()> {
    match notify::run(args).await? {
        NotifyOutcome::NoChanges => println!("No blog changes detected."),
        NotifyOutcome::Previewed { message } => println!("{message}"),
        NotifyOutcome::Delivered {
            added,
            modified,
            deleted,
        } => println!(
            "Notification sent: {added} added, {modified} modified, {deleted} deleted."
        ),
    }
    Ok(())
}
