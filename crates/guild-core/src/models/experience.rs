use serde::{Deserialize, Serialize};

/// One entry of a professional's work history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Experience {
    pub company: String,
    pub position: String,
}

impl Experience {
    pub fn new(company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
        }
    }

    /// True when the entry was added in the form but never filled in
    pub fn is_blank(&self) -> bool {
        self.company.trim().is_empty() && self.position.trim().is_empty()
    }
}
