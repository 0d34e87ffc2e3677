use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
}

impl Education {
    pub fn new(institution: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
            degree: degree.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.institution.trim().is_empty() && self.degree.trim().is_empty()
    }
}
