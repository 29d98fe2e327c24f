//! CLI subcommands.

use isp_console_dashboard::api::{IspApiClient, IspApiError};
use isp_console_dashboard::config::{ConfigError, IspApiConfig};
use secrecy::ExposeSecret;
use thiserror::Error;

pub mod export;
pub mod summary;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Backend settings are invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// ISP backend call failed.
    #[error("ISP backend error: {0}")]
    Api(#[from] IspApiError),

    /// A filter value was not recognised.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A backend client plus the token to call it with.
pub struct Connection {
    pub client: IspApiClient,
    pub token: String,
}

/// Connect to the backend configured in the environment.
///
/// # Errors
///
/// Returns `CommandError` if the configuration is invalid or
/// `ISP_API_TOKEN` is not set.
pub fn connect() -> Result<Connection, CommandError> {
    let config = IspApiConfig::from_env()?;
    let token = config
        .service_token
        .as_ref()
        .map(|t| t.expose_secret().to_owned())
        .ok_or(CommandError::MissingEnvVar("ISP_API_TOKEN"))?;

    tracing::info!(base_url = %config.base_url, "Connecting to ISP backend");
    let client = IspApiClient::new(&config)?;
    Ok(Connection { client, token })
}
