//! Posts a digest of added, modified and deleted blog documents to a chat
//! webhook after each push.

pub mod cmd;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;
pub mod workflow;
