pub mod fs;
pub mod git;
pub mod wechat;
