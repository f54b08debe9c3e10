//! In-memory collaborators for workflow tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::change::{ChangeCategory, RevisionRange};
use crate::error::{AppError, AppResult};
use crate::services::{NotifierService, VersionControlService, WorkspaceService};

#[derive(Default)]
pub struct FakeVersionControl {
    added: Vec<String>,
    modified: Vec<String>,
    deleted: Vec<String>,
    missing_revisions: HashSet<String>,
    root_revisions: HashSet<String>,
    revision_files: HashMap<(String, String), String>,
    diff_error: Option<String>,
    message: String,
    diff_calls: AtomicUsize,
}

impl FakeVersionControl {
    pub fn with_paths(mut self, category: ChangeCategory, paths: &[&str]) -> Self {
        let paths = paths.iter().map(|p| p.to_string());
        match category {
            ChangeCategory::Added => self.added.extend(paths),
            ChangeCategory::Modified => self.modified.extend(paths),
            ChangeCategory::Deleted => self.deleted.extend(paths),
        }
        self
    }

    pub fn without_revision(mut self, revision: &str) -> Self {
        self.missing_revisions.insert(revision.to_string());
        self
    }

    pub fn with_root(mut self, revision: &str) -> Self {
        self.root_revisions.insert(revision.to_string());
        self
    }

    pub fn with_revision_file(mut self, revision: &str, path: &str, content: &str) -> Self {
        self.revision_files
            .insert((revision.to_string(), path.to_string()), content.to_string());
        self
    }

    pub fn failing_diff(mut self, message: &str) -> Self {
        self.diff_error = Some(message.to_string());
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn diff_calls(&self) -> usize {
        self.diff_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionControlService for FakeVersionControl {
    async fn changed_paths(
        &self,
        _range: &RevisionRange,
        category: ChangeCategory,
    ) -> AppResult<Vec<String>> {
        self.diff_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.diff_error {
            return Err(AppError::Scan(message.clone()));
        }
        Ok(match category {
            ChangeCategory::Added => self.added.clone(),
            ChangeCategory::Modified => self.modified.clone(),
            ChangeCategory::Deleted => self.deleted.clone(),
        })
    }

    /// Every revision not marked missing resolves to itself.
    async fn resolve_revision(&self, revision: &str) -> AppResult<Option<String>> {
        if self.missing_revisions.contains(revision) {
            Ok(None)
        } else {
            Ok(Some(revision.to_string()))
        }
    }

    async fn is_root_commit(&self, revision: &str) -> AppResult<bool> {
        Ok(self.root_revisions.contains(revision))
    }

    async fn show_file(&self, revision: &str, path: &str) -> AppResult<String> {
        self.revision_files
            .get(&(revision.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| AppError::read(path, format!("not present at {revision}")))
    }

    async fn commit_message(&self, _revision: &str) -> AppResult<String> {
        Ok(self.message.clone())
    }
}

#[derive(Default)]
pub struct FakeWorkspace {
    files: HashMap<String, String>,
}

impl FakeWorkspace {
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl WorkspaceService for FakeWorkspace {
    async fn read_to_string(&self, path: &str) -> AppResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::read(path, "no such file"))
    }
}

/// Records every delivered message; optionally fails instead.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    failure: Option<String>,
}

impl RecordingNotifier {
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("notifier lock").clone()
    }
}

#[async_trait]
impl NotifierService for RecordingNotifier {
    async fn deliver(&self, content: &str) -> AppResult<()> {
        if let Some(message) = &self.failure {
            return Err(AppError::Delivery(message.clone()));
        }
        self.sent.lock().expect("notifier lock").push(content.to_string());
        Ok(())
    }
}
