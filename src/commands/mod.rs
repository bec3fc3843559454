//! CLI commands for tls

pub mod dispatch;
pub mod init;
pub mod progress;
pub mod run;
