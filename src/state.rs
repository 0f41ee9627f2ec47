use std::sync::Arc;

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub jwt_secret: Arc<str>,
    pub token_ttl: Duration,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            orm,
            jwt_secret: Arc::from(config.jwt_secret.as_str()),
            token_ttl: Duration::hours(config.jwt_ttl_hours),
        }
    }
}
