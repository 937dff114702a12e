//! Session credential access.
//!
//! The dashboard depends on authentication only through [`SessionProvider`]:
//! a single capability producing the current bearer token. A missing or
//! expired credential is not detected here; whatever is on hand is attached
//! to the request and any authorization failure surfaces as a generic
//! transport error.

use crate::config::Config;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// The bearer token for the current session. Empty if no session exists.
    async fn current_token(&self) -> String;
}

/// Session provider backed by the config file written by `shelfwatch login`.
///
/// The file is re-read on every request, so a re-login takes effect without
/// restarting the dashboard.
#[derive(Debug, Clone)]
pub struct FileSessionProvider {
    config_path: PathBuf,
}

impl FileSessionProvider {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

#[async_trait::async_trait]
impl SessionProvider for FileSessionProvider {
    async fn current_token(&self) -> String {
        match Config::load_from_file(&self.config_path) {
            Ok(config) => config.access_token,
            Err(_) => String::new(),
        }
    }
}
