use std::sync::Arc;

use chrono::Duration;

use crate::config::Config;
use crate::models::form::GenerateRequest;
use crate::session::SessionStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let sessions = SessionStore::new(
            Duration::minutes(config.session_ttl_minutes),
            GenerateRequest::new(config.default_year, config.default_month),
        );

        Self {
            sessions: Arc::new(sessions),
        }
    }
}
