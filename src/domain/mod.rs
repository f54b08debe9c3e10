pub mod change;
pub mod link;
pub mod metadata;
pub mod notification;
pub mod template;
