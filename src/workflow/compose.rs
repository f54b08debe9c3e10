use tracing::debug;

use crate::domain::change::{ChangeCategory, ChangeRecord, ChangeSet, ScanResult};
use crate::domain::link::build_link;
use crate::domain::metadata;
use crate::error::AppResult;
use crate::services::{VersionControlService, WorkspaceService};

/// Where document links point and which revisions documents are read from.
#[derive(Debug, Clone)]
pub struct ComposeSettings<'a> {
    pub base_url: &'a str,
    pub blog_dir: &'a str,
    pub extension: &'a str,
    /// Revision that still holds deleted documents.
    pub base_revision: &'a str,
    /// Revision holding added and modified documents.
    pub target_revision: &'a str,
    /// The target is the checked-out commit, so the working tree can be read.
    pub target_is_checkout: bool,
}

/// Whether `revision` is the commit currently checked out.
pub async fn is_checked_out(
    version_control: &dyn VersionControlService,
    revision: &str,
) -> AppResult<bool> {
    let target = version_control.resolve_revision(revision).await?;
    let head = version_control.resolve_revision("HEAD").await?;
    Ok(target.is_some() && target == head)
}

/// Turns every scanned path into a [`ChangeRecord`], keeping category and
/// order. Added and modified documents are read from the target revision
/// (the working tree when it is checked out); deleted ones from the base
/// revision.
pub async fn compose_changes(
    version_control: &dyn VersionControlService,
    workspace: &dyn WorkspaceService,
    scan: &ScanResult,
    settings: &ComposeSettings<'_>,
) -> AppResult<ChangeSet> {
    let mut changes = ChangeSet::default();

    for category in ChangeCategory::ALL {
        for path in scan.paths(category) {
            let content = match category {
                ChangeCategory::Added | ChangeCategory::Modified
                    if settings.target_is_checkout =>
                {
                    workspace.read_to_string(path).await?
                }
                ChangeCategory::Added | ChangeCategory::Modified => {
                    version_control
                        .show_file(settings.target_revision, path)
                        .await?
                }
                ChangeCategory::Deleted => {
                    version_control
                        .show_file(settings.base_revision, path)
                        .await?
                }
            };

            let meta = metadata::extract(path, &content, settings.extension);
            let link = build_link(settings.base_url, settings.blog_dir, &meta.slug);
            debug!(
                category = category.as_str(),
                path = %path,
                slug = %meta.slug,
                "resolved document"
            );

            changes.push(
                category,
                ChangeRecord {
                    path: path.clone(),
                    slug: meta.slug,
                    title: meta.title,
                    link,
                },
            );
        }
    }

    Ok(changes)
}
