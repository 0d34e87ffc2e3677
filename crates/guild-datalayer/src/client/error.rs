use guild_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur talking to the data layer
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Data layer {operation} returned HTTP {status}")]
    Status { operation: &'static str, status: u16 },

    #[error("Data layer {operation} reported failure: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not decode record {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: CoreError,
    },

    #[error("Profile not found: {did} {location}")]
    NotFound { did: String, location: ErrorLocation },

    #[error("A {operation} request is already in flight {location}")]
    Busy {
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Request for {did} was superseded by a newer request {location}")]
    Superseded { did: String, location: ErrorLocation },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn not_found(did: &str) -> Self {
        ClientError::NotFound {
            did: did.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn busy(operation: &'static str) -> Self {
        ClientError::Busy {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn superseded(did: &str) -> Self {
        ClientError::Superseded {
            did: did.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(operation: &'static str, status: u16) -> Self {
        ClientError::Status { operation, status }
    }

    pub fn rejected(operation: &'static str, message: impl Into<String>) -> Self {
        ClientError::Rejected {
            operation,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
