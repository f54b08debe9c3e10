use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{NotifierService, VersionControlService, WorkspaceService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub workspace: Arc<dyn WorkspaceService>,
    pub notifier: Option<Arc<dyn NotifierService>>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        workspace: Arc<dyn WorkspaceService>,
        notifier: Option<Arc<dyn NotifierService>>,
    ) -> Self {
        Self {
            config,
            version_control,
            workspace,
            notifier,
        }
    }
}
