use std::env;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        source: ParseIntError,
    },
}

/// Application configuration, loaded once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub app_port: u16,
    /// Database host
    pub db_host: String,
    /// Database port
    pub db_port: u16,
    /// Database user
    pub db_username: String,
    /// Database password
    pub db_password: String,
    /// Database schema name
    pub db_schema: String,
    /// Maximum number of pooled connections
    pub db_conn_limit: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app_port: parsed("APP_PORT", 3000)?,
            db_host: required("MYSQL_SERVER")?,
            db_port: parsed("MYSQL_SERVER_PORT", 3306)?,
            db_username: required("MYSQL_USERNAME")?,
            db_password: required("MYSQL_PASSWORD")?,
            db_schema: required("MYSQL_SCHEMA")?,
            db_conn_limit: parsed("MYSQL_CONN_LIMIT", 10)?,
        })
    }

    /// Connection string for the MySQL pool.
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.db_username, self.db_password, self.db_host, self.db_port, self.db_schema
        )
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parsed<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|source| ConfigError::Invalid { name, source }),
        Err(_) => Ok(default),
    }
}
