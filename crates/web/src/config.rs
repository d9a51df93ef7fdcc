use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use storage::{ConnectionTarget, DatabaseSettings};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub cors_max_age: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let target = match var("DATABASE_URL") {
            Some(url) => ConnectionTarget::Url(url),
            None => ConnectionTarget::Parts {
                host: var("MYSQL_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(var("MYSQL_PORT"), "MYSQL_PORT", 3306)?,
                user: var("MYSQL_USER")
                    .context("Cannot load MYSQL_USER env variable (or set DATABASE_URL)")?,
                password: var("MYSQL_PASSWORD"),
                database: var("MYSQL_DATABASE")
                    .context("Cannot load MYSQL_DATABASE env variable (or set DATABASE_URL)")?,
            },
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(var("PORT"), "PORT", 8080)?,
            database: DatabaseSettings {
                target,
                max_connections: parse_or(
                    var("DATABASE_MAX_CONNECTIONS"),
                    "DATABASE_MAX_CONNECTIONS",
                    5,
                )?,
            },
            cors_max_age: Duration::from_secs(parse_or(
                var("CORS_MAX_AGE_SECONDS"),
                "CORS_MAX_AGE_SECONDS",
                86_400,
            )?),
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_database_url_takes_precedence() {
        let config = config(&[
            ("DATABASE_URL", "mysql://u:p@db/seido"),
            ("MYSQL_USER", "ignored"),
        ])
        .unwrap();

        assert_eq!(
            config.database.target,
            ConnectionTarget::Url("mysql://u:p@db/seido".to_string())
        );
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("MYSQL_USER", "seido"), ("MYSQL_DATABASE", "seido")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.cors_max_age, Duration::from_secs(86_400));
        assert_eq!(
            config.database.target,
            ConnectionTarget::Parts {
                host: "localhost".to_string(),
                port: 3306,
                user: "seido".to_string(),
                password: None,
                database: "seido".to_string(),
            }
        );
    }

    #[test]
    fn test_parts_require_user_and_database() {
        assert!(config(&[("MYSQL_DATABASE", "seido")]).is_err());
        assert!(config(&[("MYSQL_USER", "seido")]).is_err());
        assert!(config(&[("MYSQL_USER", ""), ("MYSQL_DATABASE", "seido")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let err = config(&[("DATABASE_URL", "mysql://db/seido"), ("PORT", "http")])
            .unwrap_err()
            .to_string();
        assert!(err.contains("PORT"));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "mysql://db/seido"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("CORS_MAX_AGE_SECONDS", "60"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.cors_max_age, Duration::from_secs(60));
    }
}
