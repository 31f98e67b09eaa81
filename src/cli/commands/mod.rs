pub mod backup;
pub mod cabinet;
pub mod config;
pub mod export;
pub mod init;
pub mod panel;
pub mod project;
pub mod store;
