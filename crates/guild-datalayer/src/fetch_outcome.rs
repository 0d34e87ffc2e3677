use crate::{ClientError, ClientResult};

/// Result of a read that may be answered with placeholder data.
///
/// `Fallback` keeps "real data" and "placeholder data" distinguishable even
/// though both carry the same shape.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// Data read from the store
    Live(T),
    /// Placeholder data standing in for an unreadable store
    Fallback { data: T, reason: String },
    Failed(ClientError),
}

impl<T> FetchOutcome<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Live(data) | Self::Fallback { data, .. } => Some(data),
            Self::Failed(_) => None,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// `live`, `fallback` or `failed`
    pub fn source(&self) -> &'static str {
        match self {
            Self::Live(_) => "live",
            Self::Fallback { .. } => "fallback",
            Self::Failed(_) => "failed",
        }
    }

    /// Live and fallback data are both `Ok`
    pub fn into_result(self) -> ClientResult<T> {
        match self {
            Self::Live(data) | Self::Fallback { data, .. } => Ok(data),
            Self::Failed(err) => Err(err),
        }
    }
}
