pub mod notifier;
pub mod version_control;
pub mod workspace;

pub use notifier::NotifierService;
pub use version_control::VersionControlService;
pub use workspace::WorkspaceService;
