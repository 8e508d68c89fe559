use axum::{Router, extract::DefaultBodyLimit, routing::get};
use std::sync::Arc;

use crate::config::Config;
use crate::handlers::{health::health, setup};
use crate::setup::SetupService;

/// The form has three short fields.
pub const BODY_LIMIT: usize = 16 * 1024;

#[derive(Clone)]
pub struct SetupState {
    pub config: Arc<Config>,
    pub service: SetupService,
}

impl SetupState {
    pub fn new(config: Config) -> Self {
        let service = SetupService::from_config(&config.storage);
        Self {
            config: Arc::new(config),
            service,
        }
    }

    pub fn database_path_display(&self) -> String {
        self.service.database_path().display().to_string()
    }
}

pub fn setup_router(state: SetupState) -> Router {
    Router::new()
        .route("/", get(setup::setup_page).post(setup::setup_submit))
        .route("/setup", get(setup::setup_page).post(setup::setup_submit))
        .route("/healthz", get(health))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
