use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "postgresql")]
    Postgres,
    #[serde(alias = "mariadb")]
    Mysql,
}

impl Dialect {
    pub fn scheme(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Dialect::Postgres => 5432,
            Dialect::Mysql => 3306,
        }
    }
}

#[derive(Deserialize)]
struct RawDatabaseSettings {
    #[serde(default)]
    dialect: Dialect,
    user: SecretString,
    password: SecretString,
    host: SecretString,
    port: Option<SecretString>,
    database_name: String,
}

/// Connection parameters for the backing database.
///
/// Every field except `database_name` and `dialect` is secret and only shows
/// up redacted in `Debug` output.
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawDatabaseSettings")]
pub struct DatabaseSettings {
    pub dialect: Dialect,
    pub user: SecretString,
    pub password: SecretString,
    pub host: SecretString,
    pub port: SecretString,
    pub database_name: String,
}

impl TryFrom<RawDatabaseSettings> for DatabaseSettings {
    type Error = String;

    fn try_from(raw: RawDatabaseSettings) -> Result<Self, Self::Error> {
        let port = match raw.port {
            Some(port) => {
                let port = port.expose_secret().trim();
                if port.parse::<u16>().is_err() {
                    // The value itself stays out of the message.
                    return Err("database port must be an integer between 0 and 65535".to_owned());
                }
                SecretString::from(port.to_owned())
            }
            None => SecretString::from(raw.dialect.default_port().to_string()),
        };

        Ok(Self {
            dialect: raw.dialect,
            user: raw.user,
            password: raw.password,
            host: raw.host,
            port,
            database_name: raw.database_name,
        })
    }
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> SecretString {
        SecretString::from(format!(
            "{}://{}:{}@{}:{}/{}",
            self.dialect.scheme(),
            self.user.expose_secret(),
            self.password.expose_secret(),
            self.host.expose_secret(),
            self.port.expose_secret(),
            self.database_name,
        ))
    }
}
