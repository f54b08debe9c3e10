use tracing::{debug, info, warn};

use crate::domain::change::{ChangeCategory, RevisionRange, ScanResult};
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

/// Which changed paths are reported: those under `dir` ending in `extension`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    prefix: String,
    extension: String,
}

impl PathFilter {
    pub fn new(dir: &str, extension: &str) -> Self {
        let dir = dir.trim_matches('/');
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };
        Self {
            prefix,
            extension: extension.to_string(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix) && path.ends_with(&self.extension)
    }
}

/// Classifies the paths changed across `range` into added, modified and
/// deleted, keeping only those accepted by `filter`.
///
/// When `from` does not resolve because `to` is the first commit in history,
/// the result is empty. Any other unresolvable revision is a scan error.
pub async fn scan_changes(
    version_control: &dyn VersionControlService,
    range: &RevisionRange,
    filter: &PathFilter,
) -> AppResult<ScanResult> {
    if version_control.resolve_revision(&range.to).await?.is_none() {
        return Err(AppError::Scan(format!("revision '{}' not found", range.to)));
    }

    if version_control.resolve_revision(&range.from).await?.is_none() {
        if version_control.is_root_commit(&range.to).await? {
            warn!(to = %range.to, "first commit has no parent; treating as no changes");
            return Ok(ScanResult::empty());
        }
        return Err(AppError::Scan(format!(
            "revision '{}' not found",
            range.from
        )));
    }

    let mut result = ScanResult::empty();
    for category in ChangeCategory::ALL {
        let paths = version_control.changed_paths(range, category).await?;
        let total = paths.len();
        let kept = result.paths_mut(category);
        kept.extend(paths.into_iter().filter(|path| filter.matches(path)));
        debug!(
            category = category.as_str(),
            total,
            kept = kept.len(),
            "filtered changed paths"
        );
    }

    info!(
        added = result.added.len(),
        modified = result.modified.len(),
        deleted = result.deleted.len(),
        "scanned {}..{}",
        range.from,
        range.to
    );
    Ok(result)
}
