use std::time::Duration;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(super) server: ServerSettings,
    pub(super) runtime: RuntimeSettings,
    pub(super) api: ApiSettings,
    pub(super) cors: CorsSettings,
    pub(super) database: DatabaseSettings,
    pub(super) telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub(crate) struct ServerSettings {
    pub(super) host: ServerHost,
    pub(super) port: ServerPort,
}

/// Reported by `GET /`.
#[derive(Debug, Clone)]
pub(crate) struct ApiSettings {
    pub(crate) project_name: String,
    pub(crate) version: String,
}

/// Allowed browser origins. Empty means any origin is accepted.
#[derive(Debug, Clone)]
pub(crate) struct CorsSettings {
    pub(crate) origins: Vec<String>,
}

/// Store connection, parsed from `DATABASE_URL` or assembled from the
/// `POSTGRES_*` parts.
#[derive(Debug, Clone)]
pub(crate) struct DatabaseSettings {
    pub(crate) connect_options: PgConnectOptions,
    pub(crate) max_connections: u32,
    pub(crate) acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub(crate) struct TelemetrySettings {
    pub(crate) log_level: String,
    pub(crate) json: bool,
    pub(crate) prometheus_enabled: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct RuntimeSettings {
    pub(crate) environment: Environment,
    pub(crate) strict_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Environment {
    Development,
    Staging,
    Production,
    Test,
}

impl Environment {
    /// Unknown or missing names fall back to development.
    pub(super) fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::Development;
        };

        match name.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" => Self::Staging,
            "test" | "testing" => Self::Test,
            _ => Self::Development,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ServerHost(pub(super) String);

#[derive(Debug, Clone, Copy)]
pub(crate) struct ServerPort(pub(super) u16);

impl ServerHost {
    pub(super) fn parse(value: String) -> Result<Self, ConfigError> {
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidHost(value));
        }

        Ok(Self(value))
    }
}

impl ServerPort {
    pub(super) fn parse(value: String) -> Result<Self, ConfigError> {
        match value.parse::<u16>() {
            Ok(port) if port != 0 => Ok(Self(port)),
            _ => Err(ConfigError::InvalidPort(value)),
        }
    }
}

/// The individual `POSTGRES_*` variables, used when `DATABASE_URL` is unset.
#[derive(Debug)]
pub(super) struct PostgresParts {
    pub(super) server: String,
    pub(super) port: u16,
    pub(super) user: String,
    pub(super) password: String,
    pub(super) db: String,
}

impl PostgresParts {
    /// Credentials are passed through as-is, so they need no URL escaping.
    pub(super) fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.server)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.db)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("invalid server host: {0:?}")]
    InvalidHost(String),
    #[error("invalid server port: {0:?}")]
    InvalidPort(String),
    #[error("{key} must be a positive number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("DATABASE_URL is not a valid Postgres URL: {0}")]
    InvalidDatabaseUrl(String),
    #[error("BACKEND_CORS_ORIGINS is not a JSON array of strings: {0}")]
    InvalidCors(String),
    #[error("{0} is required when strict configuration is enabled")]
    MissingSecret(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_port_rejects_zero_and_garbage() {
        assert!(matches!(ServerPort::parse("0".to_string()), Err(ConfigError::InvalidPort(_))));
        assert!(matches!(ServerPort::parse("http".to_string()), Err(ConfigError::InvalidPort(_))));
        assert_eq!(ServerPort::parse("3000".to_string()).expect("port").0, 3000);
    }

    #[test]
    fn server_host_rejects_whitespace() {
        assert!(ServerHost::parse("0.0.0.0".to_string()).is_ok());
        assert!(matches!(
            ServerHost::parse("local host".to_string()),
            Err(ConfigError::InvalidHost(_))
        ));
    }

    #[test]
    fn postgres_parts_keep_reserved_characters_in_credentials() {
        let parts = PostgresParts {
            server: "db".to_string(),
            port: 5433,
            user: "quiz@ops".to_string(),
            password: "p@ss/w:rd#1".to_string(),
            db: "edyoucator".to_string(),
        };
        let options = parts.connect_options();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "quiz@ops");
        assert_eq!(options.get_database(), Some("edyoucator"));
    }

    #[test]
    fn environment_names() {
        assert_eq!(Environment::from_name(Some("prod")), Environment::Production);
        assert_eq!(Environment::from_name(Some("Production")), Environment::Production);
        assert_eq!(Environment::from_name(Some("staging")), Environment::Staging);
        assert_eq!(Environment::from_name(Some("testing")), Environment::Test);
        assert_eq!(Environment::from_name(Some("qa")), Environment::Development);
        assert_eq!(Environment::from_name(None), Environment::Development);
    }
}
