use std::env;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_name: String,
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub log_level: String,
    pub template_dir: String,
}

impl AppConfig {
    /// Reads the service configuration from the process environment.
    ///
    /// Under `ENVIRONMENT=air` (local hot-reload) a `.env` file is loaded first;
    /// anywhere else the variables are expected to be set already.
    pub fn from_env() -> Result<Self, AppError> {
        if env::var("ENVIRONMENT").as_deref() == Ok("air") {
            dotenvy::from_filename(".env")
                .map_err(|e| AppError::Config(format!("failed to load .env: {}", e)))?;
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("invalid server port: {:?}", port)))?,
            None => 8080,
        };

        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_CONNECTION_STRING"))
            .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

        Ok(Self {
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "rsvp-service".to_string()),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            database_url,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            template_dir: lookup("TEMPLATE_DIR").unwrap_or_else(|| "templates".to_string()),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
