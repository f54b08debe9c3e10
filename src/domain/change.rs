#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    Added,
    Modified,
    Deleted,
}

impl ChangeCategory {
    pub const ALL: [ChangeCategory; 3] = [
        ChangeCategory::Added,
        ChangeCategory::Modified,
        ChangeCategory::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCategory::Added => "added",
            ChangeCategory::Modified => "modified",
            ChangeCategory::Deleted => "deleted",
        }
    }

    /// Operation code understood by `git diff --diff-filter`.
    pub fn diff_filter(&self) -> char {
        match self {
            ChangeCategory::Added => 'A',
            ChangeCategory::Modified => 'M',
            ChangeCategory::Deleted => 'D',
        }
    }
}

/// The pair of revisions a scan compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub from: String,
    pub to: String,
}

impl RevisionRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Paths reported by the scanner, per category, in diff order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
}

impl ScanResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    pub fn paths(&self, category: ChangeCategory) -> &[String] {
        match category {
            ChangeCategory::Added => &self.added,
            ChangeCategory::Modified => &self.modified,
            ChangeCategory::Deleted => &self.deleted,
        }
    }

    pub fn paths_mut(&mut self, category: ChangeCategory) -> &mut Vec<String> {
        match category {
            ChangeCategory::Added => &mut self.added,
            ChangeCategory::Modified => &mut self.modified,
            ChangeCategory::Deleted => &mut self.deleted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub path: String,
    pub slug: String,
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<ChangeRecord>,
    pub modified: Vec<ChangeRecord>,
    pub deleted: Vec<ChangeRecord>,
}

impl ChangeSet {
    pub fn records(&self, category: ChangeCategory) -> &[ChangeRecord] {
        match category {
            ChangeCategory::Added => &self.added,
            ChangeCategory::Modified => &self.modified,
            ChangeCategory::Deleted => &self.deleted,
        }
    }

    pub fn push(&mut self, category: ChangeCategory, record: ChangeRecord) {
        match category {
            ChangeCategory::Added => self.added.push(record),
            ChangeCategory::Modified => self.modified.push(record),
            ChangeCategory::Deleted => self.deleted.push(record),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }
}
