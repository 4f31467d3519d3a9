use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::catalog::DEFAULT_STORAGE_KEY;
use crate::error::ConfigError;

const MIN_SECRET_LEN: usize = 32;
const MAX_SESSION_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub storage_key: String,
    pub admin_email: String,
    pub admin_name: String,
    pub admin_password: String,
    /// `None` means a per-process secret is generated at start-up.
    pub jwt_secret: Option<String>,
    pub session_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            db_path: PathBuf::from("montela.db"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            admin_email: "admin@montela.com".to_string(),
            admin_name: "Admin Montela".to_string(),
            admin_password: "admin123".to_string(),
            jwt_secret: None,
            session_hours: 24,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let jwt_secret = match get("MONTELA_JWT_SECRET") {
            Some(secret) if secret.len() < MIN_SECRET_LEN => {
                return Err(ConfigError::Invalid {
                    var: "MONTELA_JWT_SECRET",
                    reason: format!("must be at least {} bytes", MIN_SECRET_LEN),
                });
            }
            other => other,
        };

        let session_hours = match get("MONTELA_SESSION_HOURS") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(hours) if hours > 0 && hours <= MAX_SESSION_HOURS => hours,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: "MONTELA_SESSION_HOURS",
                        reason: format!("must be between 1 and {}", MAX_SESSION_HOURS),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: "MONTELA_SESSION_HOURS",
                        reason: e.to_string(),
                    })
                }
            },
            None => defaults.session_hours,
        };

        let config = AppConfig {
            db_path: get("MONTELA_DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
            storage_key: get("MONTELA_STORAGE_KEY").unwrap_or(defaults.storage_key),
            admin_email: get("MONTELA_ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_name: get("MONTELA_ADMIN_NAME").unwrap_or(defaults.admin_name),
            admin_password: get("MONTELA_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            jwt_secret,
            session_hours,
        };

        tracing::info!(db = %config.db_path.display(), key = %config.storage_key, "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.storage_key, "montela-products");
        assert_eq!(config.admin_email, "admin@montela.com");
        assert_eq!(config.session_hours, 24);
        assert!(config.jwt_secret.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MONTELA_DB_PATH", "/tmp/shop.db"),
            ("MONTELA_STORAGE_KEY", "shop"),
            ("MONTELA_SESSION_HOURS", "2"),
            ("MONTELA_JWT_SECRET", "0123456789abcdef0123456789abcdef"),
        ]))
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(config.storage_key, "shop");
        assert_eq!(config.session_hours, 2);
        assert!(config.jwt_secret.is_some());
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("MONTELA_JWT_SECRET", "short")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { var: "MONTELA_JWT_SECRET", .. })
        ));
    }

    #[test]
    fn test_bad_session_hours_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("MONTELA_SESSION_HOURS", "abc")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("MONTELA_SESSION_HOURS", "0")])).is_err());
    }

    #[test]
    fn test_oversized_session_hours_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("MONTELA_SESSION_HOURS", "1000000000000")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { var: "MONTELA_SESSION_HOURS", .. })
        ));

        // one year is the longest accepted session
        let config = AppConfig::from_lookup(lookup(&[("MONTELA_SESSION_HOURS", "8760")])).unwrap();
        assert_eq!(config.session_hours, 8760);
        assert!(AppConfig::from_lookup(lookup(&[("MONTELA_SESSION_HOURS", "8761")])).is_err());
    }
}
