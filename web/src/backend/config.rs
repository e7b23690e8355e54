use std::env;

use crate::app::RouteTable;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} should be provided")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Server settings read from the environment (and `.env`, via `dotenvy`).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub session_secure: bool,
    pub session_expiry_days: i64,
    /// Base URL of the hosting application the welcome page links into.
    pub app_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let session_secure = match lookup("SESSION_SECURE") {
            None => false,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SESSION_SECURE",
                        value,
                    })
                }
            },
        };

        let session_expiry_days = match lookup("SESSION_EXPIRY_DAYS") {
            None => 1,
            Some(value) => match value.parse::<i64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SESSION_EXPIRY_DAYS",
                        value,
                    })
                }
            },
        };

        let app_url = lookup("APP_URL").filter(|url| !url.is_empty());

        Ok(Self {
            database_url,
            session_secure,
            session_expiry_days,
            app_url,
        })
    }

    pub fn route_table(&self) -> RouteTable {
        match &self.app_url {
            Some(base) => RouteTable::with_base(base),
            None => RouteTable::default(),
        }
    }
}
