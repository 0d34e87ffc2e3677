use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Availability of a professional.
///
/// Directory listings use `available`/`limited`/`unavailable`; the registration
/// wizard offers engagement options (`full-time`, `part-time`, `contract`).
/// Both live in the same enum so registered records decode on the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
    FullTime,
    PartTime,
    Contract,
}

impl Availability {
    pub const ALL: [Availability; 6] = [
        Self::Available,
        Self::Limited,
        Self::Unavailable,
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
    ];

    /// Options offered by the registration wizard
    pub const REGISTRATION_OPTIONS: [Availability; 3] =
        [Self::FullTime, Self::PartTime, Self::Contract];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Limited => "limited",
            Self::Unavailable => "unavailable",
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
        }
    }
}

impl FromStr for Availability {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|availability| availability.as_str() == s)
            .ok_or_else(|| CoreError::InvalidAvailability {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
