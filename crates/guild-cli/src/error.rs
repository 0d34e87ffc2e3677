use guild_config::ConfigError;
use guild_core::CoreError;
use guild_datalayer::ClientError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid argument {argument}: {message} {location}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            argument,
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
