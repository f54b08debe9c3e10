use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::domain::change::{ChangeCategory, RevisionRange};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

/// Version control backed by the `git` executable.
pub struct GitCli {
    workspace_root: PathBuf,
    timeout: Duration,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf, timeout: Duration) -> Self {
        Self {
            workspace_root,
            timeout,
        }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, String> {
        debug!(?args, root = %self.workspace_root.display(), "running git");

        let output = timeout(
            self.timeout,
            Command::new("git")
                .args(args)
                .current_dir(&self.workspace_root)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output(),
        )
        .await
        .map_err(|_| format!("git timed out after {} seconds", self.timeout.as_secs()))?
        .map_err(|err| format!("failed to spawn git: {err}"))?;

        Ok(output)
    }

    async fn run_checked(&self, args: &[&str]) -> Result<String, String> {
        let output = self.run(args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output.status.code().unwrap_or(-1);
            return Err(format!(
                "`git {}` exited with code {code}: {}",
                args.join(" "),
                stderr.trim()
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Splits newline-delimited git output into paths, dropping blank lines.
pub fn parse_path_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn changed_paths(
        &self,
        range: &RevisionRange,
        category: ChangeCategory,
    ) -> AppResult<Vec<String>> {
        let filter = format!("--diff-filter={}", category.diff_filter());
        let stdout = self
            .run_checked(&[
                "-c",
                "core.quotepath=off",
                "diff",
                "--no-renames",
                "--name-only",
                &filter,
                &range.from,
                &range.to,
                "--",
            ])
            .await
            .map_err(AppError::Scan)?;
        Ok(parse_path_list(&stdout))
    }

    async fn resolve_revision(&self, revision: &str) -> AppResult<Option<String>> {
        let target = format!("{revision}^{{commit}}");
        let output = self
            .run(&["rev-parse", "--verify", "--quiet", &target])
            .await
            .map_err(AppError::Scan)?;

        // `--verify --quiet` exits 1 for an unknown revision; anything else
        // non-zero means git itself could not run here.
        match output.status.code() {
            Some(0) => Ok(Some(
                String::from_utf8_lossy(&output.stdout).trim().to_string(),
            )),
            Some(1) => Ok(None),
            code => Err(AppError::Scan(format!(
                "`git rev-parse {target}` exited with code {}: {}",
                code.unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }

    async fn is_root_commit(&self, revision: &str) -> AppResult<bool> {
        let stdout = self
            .run_checked(&["rev-list", "--parents", "-n", "1", revision, "--"])
            .await
            .map_err(AppError::Scan)?;
        Ok(stdout.split_whitespace().count() == 1)
    }

    async fn show_file(&self, revision: &str, path: &str) -> AppResult<String> {
        let object = format!("{revision}:{path}");
        self.run_checked(&["show", &object])
            .await
            .map_err(|message| AppError::read(path, message))
    }

    async fn commit_message(&self, revision: &str) -> AppResult<String> {
        let stdout = self
            .run_checked(&["log", "-1", "--format=%B", revision])
            .await
            .map_err(AppError::Scan)?;
        Ok(stdout.trim().to_string())
    }
}
