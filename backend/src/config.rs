use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "expected development, staging or production, got {}",
                other
            )),
        }
    }
}

/// Server settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    /// Directory holding the built frontend (`index.html` and assets).
    pub static_dir: PathBuf,
    /// `max-age` of the cache-control header on static responses.
    pub static_max_age: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => value.parse().map_err(|reason| ConfigError::Invalid {
                name: "ENVIRONMENT",
                value,
                reason,
            })?,
            None => Environment::Development,
        };
        let port = match lookup("PORT") {
            Some(value) => parse_number("PORT", value)?,
            // staging runs next to the production instance
            None if environment == Environment::Staging => 3100,
            None => 3000,
        };
        let static_max_age = match lookup("STATIC_MAX_AGE") {
            Some(value) => parse_number("STATIC_MAX_AGE", value)?,
            None if environment.is_development() => 0,
            None => 3600,
        };
        Ok(Self {
            environment,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend/dist")),
            static_max_age,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

fn parse_number<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_development() {
        let config = load(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.static_max_age, 0);
    }

    #[test]
    fn staging_uses_its_own_port() {
        let config = load(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.port, 3100);
        assert_eq!(config.static_max_age, 3600);
    }

    #[test]
    fn explicit_values_win() {
        let config = load(&[
            ("ENVIRONMENT", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/a2"),
            ("STATIC_MAX_AGE", "86400"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.index_file(), PathBuf::from("/srv/a2/index.html"));
        assert_eq!(config.static_max_age, 86400);
    }

    #[test]
    fn rejects_bad_values() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

        let err = load(&[("ENVIRONMENT", "prod")]).unwrap_err();
        assert!(err.to_string().starts_with("ENVIRONMENT has invalid value \"prod\""));
    }
}
