/**
 * Server Configuration
 *
 * Loads the server configuration from environment variables. `.env` is read
 * by the binary before this runs, so both sources look the same here.
 *
 * # Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `SERVER_PORT` | `3000` |
 * | `JWT_SECRET` | required |
 * | `TOKEN_TTL_SECS` | 86400 |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
 * | `STORE_BACKEND` | `sqlite` (or `json`) |
 * | `DATABASE_URL` | `sqlite://postboard.db?mode=rwc` |
 * | `JSON_STORE_PATH` | `postboard.json` |
 *
 * Unlike optional services elsewhere, a missing secret or an unparseable
 * value stops startup.
 */

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://postboard.db?mode=rwc";
pub const DEFAULT_JSON_STORE_PATH: &str = "postboard.json";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingValue(&'static str),

    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Which persistence backend to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Sqlite { url: String },
    Json { path: PathBuf },
}

/// Everything the server needs at startup
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub store: StoreConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("store", &self.store)
            .finish()
    }
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let port = parse("SERVER_PORT", get("SERVER_PORT"), DEFAULT_PORT)?;
        let ttl_secs = parse("TOKEN_TTL_SECS", get("TOKEN_TTL_SECS"), DEFAULT_TOKEN_TTL.as_secs())?;
        if ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "TOKEN_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }
        let bcrypt_cost = parse("BCRYPT_COST", get("BCRYPT_COST"), bcrypt::DEFAULT_COST)?;

        let backend = get("STORE_BACKEND").unwrap_or_else(|| "sqlite".to_string());
        let store = match backend.trim().to_ascii_lowercase().as_str() {
            "sqlite" => StoreConfig::Sqlite {
                url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            },
            "json" => StoreConfig::Json {
                path: get("JSON_STORE_PATH")
                    .unwrap_or_else(|| DEFAULT_JSON_STORE_PATH.to_string())
                    .into(),
            },
            _ => {
                return Err(ConfigError::InvalidValue {
                    name: "STORE_BACKEND",
                    value: backend,
                })
            }
        };

        Ok(Self {
            port,
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_secs),
            bcrypt_cost,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.token_ttl, DEFAULT_TOKEN_TTL);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(
            config.store,
            StoreConfig::Sqlite {
                url: DEFAULT_DATABASE_URL.to_string()
            }
        );
    }

    #[test]
    fn test_secret_is_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::MissingValue("JWT_SECRET"));
        assert_eq!(
            load(&[("JWT_SECRET", "  ")]).unwrap_err(),
            ConfigError::MissingValue("JWT_SECRET")
        );
    }

    #[test]
    fn test_json_backend() {
        let config = load(&[
            ("JWT_SECRET", "s3cret"),
            ("STORE_BACKEND", "JSON"),
            ("JSON_STORE_PATH", "/tmp/board.json"),
        ])
        .unwrap();
        assert_eq!(
            config.store,
            StoreConfig::Json {
                path: PathBuf::from("/tmp/board.json")
            }
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("JWT_SECRET", "s3cret"), ("SERVER_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "SERVER_PORT", .. }));

        let err = load(&[("JWT_SECRET", "s3cret"), ("TOKEN_TTL_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "TOKEN_TTL_SECS", .. }));

        let err = load(&[("JWT_SECRET", "s3cret"), ("STORE_BACKEND", "mysql")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "STORE_BACKEND", .. }));
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = load(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert!(!format!("{:?}", config).contains("s3cret"));
    }
}
