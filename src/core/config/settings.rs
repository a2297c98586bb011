use std::time::Duration;

use super::parsing::{parse_cors_origins, EnvReader};
use super::types::{
    ApiSettings, ConfigError, CorsSettings, DatabaseSettings, Environment, PostgresParts,
    RuntimeSettings, ServerHost, ServerPort, ServerSettings, Settings, TelemetrySettings,
};

impl Settings {
    /// Reads the process environment.
    pub(crate) fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader::new(lookup);

        let environment =
            Environment::from_name(env.first(&["QUIZ_ENV", "ENVIRONMENT"]).as_deref());
        let strict_config =
            env.flag("QUIZ_STRICT_CONFIG") || environment == Environment::Production;

        let port = env.first(&["QUIZ_PORT", "PORT"]).unwrap_or_else(|| "3000".to_string());
        let server = ServerSettings {
            host: ServerHost::parse(env.text("QUIZ_HOST", "0.0.0.0"))?,
            port: ServerPort::parse(port)?,
        };

        let explicit_url = env.get("DATABASE_URL");
        let strict_needs_password = strict_config && explicit_url.is_none();
        let postgres = PostgresParts {
            server: env.text("POSTGRES_SERVER", "localhost"),
            port: env.number("POSTGRES_PORT", 5432)?,
            user: env.text("POSTGRES_USER", "testuser"),
            password: env.text("POSTGRES_PASSWORD", ""),
            db: env.text("POSTGRES_DB", "edyoucator"),
        };
        if strict_needs_password && postgres.password.is_empty() {
            return Err(ConfigError::MissingSecret("POSTGRES_PASSWORD"));
        }

        let max_connections: u32 = env.number("DATABASE_MAX_CONNECTIONS", 10)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidNumber {
                key: "DATABASE_MAX_CONNECTIONS",
                value: max_connections.to_string(),
            });
        }

        let connect_options = match explicit_url {
            Some(url) => url.parse().map_err(|_| ConfigError::InvalidDatabaseUrl(url))?,
            None => postgres.connect_options(),
        };

        let acquire_timeout_secs = env.number("DATABASE_ACQUIRE_TIMEOUT_SECS", 30)?;
        let database = DatabaseSettings {
            connect_options,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        };

        Ok(Self {
            server,
            runtime: RuntimeSettings { environment, strict_config },
            api: ApiSettings {
                project_name: env.text("PROJECT_NAME", "Quiz Platform API"),
                version: env.text("VERSION", env!("CARGO_PKG_VERSION")),
            },
            cors: CorsSettings { origins: parse_cors_origins(env.get("BACKEND_CORS_ORIGINS"))? },
            database,
            telemetry: TelemetrySettings {
                log_level: env.text("QUIZ_LOG_LEVEL", "info"),
                json: env.flag("QUIZ_LOG_JSON"),
                prometheus_enabled: env.flag("PROMETHEUS_ENABLED"),
            },
        })
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }
}
