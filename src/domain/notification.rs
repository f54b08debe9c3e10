use crate::domain::change::{ChangeCategory, ChangeRecord, ChangeSet};

/// Facts about the triggering push, supplied by the CI host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitContext {
    pub branch: String,
    pub commit_message: String,
    pub actor: String,
}

/// Everything a message template can draw from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationContext {
    pub branch: String,
    pub commit_message: String,
    pub actor: String,
    pub added: Vec<ChangeRecord>,
    pub modified: Vec<ChangeRecord>,
    pub deleted: Vec<ChangeRecord>,
}

impl NotificationContext {
    pub fn new(commit: CommitContext, changes: ChangeSet) -> Self {
        Self {
            branch: commit.branch,
            commit_message: commit.commit_message,
            actor: commit.actor,
            added: changes.added,
            modified: changes.modified,
            deleted: changes.deleted,
        }
    }

    pub fn records(&self, category: ChangeCategory) -> &[ChangeRecord] {
        match category {
            ChangeCategory::Added => &self.added,
            ChangeCategory::Modified => &self.modified,
            ChangeCategory::Deleted => &self.deleted,
        }
    }
}

/// Markdown bullet list with one `- [title](link)` line per record, or
/// `empty_text` when there are none.
pub fn bullet_list(records: &[ChangeRecord], empty_text: &str) -> String {
    if records.is_empty() {
        return empty_text.to_string();
    }
    records
        .iter()
        .map(|record| format!("- [{}]({})\n", record.title, record.link))
        .collect()
}
