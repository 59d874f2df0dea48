use std::path::Path;

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

pub mod db;
pub mod server;
use db::DatabaseSettings;
use server::ServerSettings;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Load settings from `./config`, `.env` and the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        // A missing .env is fine; variables may come from the real environment.
        let _ = dotenvy::dotenv();

        let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        Self::load(&base_path.join("config"), None)
    }

    /// Load settings from `config_dir`, reading variables from `env` instead of
    /// the process environment when given.
    pub fn load(config_dir: &Path, env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let database = Config::builder()
            .set_default("user", "sandbox")?
            .set_default("password", "sandbox")?
            .set_default("host", "localhost")?
            .set_default("database_name", "sandbox")?
            .add_source(File::from(config_dir.join("database.toml")).required(false))
            .add_source(Environment::with_prefix("DB").source(env.clone()))
            .build()?
            .try_deserialize()?;

        let server = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("log_level", "info")?
            .add_source(File::from(config_dir.join("server.toml")).required(false))
            .add_source(Environment::with_prefix("APP").source(env))
            .build()?
            .try_deserialize()?;

        Ok(Self { database, server })
    }
}
