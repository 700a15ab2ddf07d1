use serde::Serialize;
use std::env;

use crate::error::AppError;

/// AppConfig
///
/// Holds the application's entire configuration state. Immutable once loaded and
/// pulled into handlers via FromRef, like the rest of `AppState`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls the log format.
    pub env: Env,
    // Interface the HTTP listener binds to.
    pub host: String,
    // TCP port the HTTP listener binds to.
    pub port: u16,
}

/// Env
///
/// Defines the runtime context: pretty logs for local work, JSON logs for production.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Local,
    Production,
}

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

impl Default for AppConfig {
    /// Local defaults, used by tests that need a state without touching the environment.
    fn default() -> Self {
        Self {
            env: Env::Local,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables at startup.
    ///
    /// - `APP_ENV`: `production` selects `Env::Production`; anything else is local.
    /// - `APP_HOST`: bind interface, defaults to `0.0.0.0`.
    /// - `APP_PORT`: bind port, defaults to `3000`.
    ///
    /// # Errors
    /// Returns `AppError::InvalidConfig` when `APP_PORT` is set but is not a valid port.
    pub fn load() -> Result<Self, AppError> {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("APP_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| AppError::InvalidConfig {
                var: "APP_PORT",
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { env, host, port })
    }

    /// The `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
