use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Professional category a profile is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Developer,
    Farming,
    Data,
    Security,
    #[serde(rename = "aiops")]
    AiOps,
    Infrastructure,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Developer,
        Self::Farming,
        Self::Data,
        Self::Security,
        Self::AiOps,
        Self::Infrastructure,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Farming => "farming",
            Self::Data => "data",
            Self::Security => "security",
            Self::AiOps => "aiops",
            Self::Infrastructure => "infrastructure",
        }
    }

    /// Human readable label used by listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Developer => "Development",
            Self::Farming => "Farming & Plotting",
            Self::Data => "Data & Analytics",
            Self::Security => "Security & Audits",
            Self::AiOps => "AI Operations",
            Self::Infrastructure => "Infrastructure",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
