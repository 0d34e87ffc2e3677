use crate::WizardStep;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Please fill in all required fields ({step}): {} {location}", fields.join(", "))]
    MissingRequiredFields {
        step: WizardStep,
        fields: Vec<&'static str>,
        location: ErrorLocation,
    },

    #[error("Invalid wizard transition: {message} {location}")]
    InvalidTransition {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid availability: {value} {location}")]
    InvalidAvailability {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort key: {value} {location}")]
    InvalidSortKey {
        value: String,
        location: ErrorLocation,
    },

    #[error("Hex envelope decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
