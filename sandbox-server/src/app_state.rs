use std::sync::Arc;

use secrecy::SecretString;
use services::connection::Connector;

use crate::settings::db::DatabaseSettings;

/// Process-wide state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub connection_string: Arc<SecretString>,
    pub connector: Arc<dyn Connector>,
}

impl AppState {
    pub fn new(database: &DatabaseSettings, connector: Arc<dyn Connector>) -> Self {
        Self {
            connection_string: Arc::new(database.connection_string()),
            connector,
        }
    }
}
