use serde::{Deserialize, Serialize};

/// Registration wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    Expertise,
    Experience,
    Identity,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        Self::PersonalInfo,
        Self::Expertise,
        Self::Experience,
        Self::Identity,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::Expertise),
            Self::Expertise => Some(Self::Experience),
            Self::Experience => Some(Self::Identity),
            Self::Identity => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::Expertise => Some(Self::PersonalInfo),
            Self::Experience => Some(Self::Expertise),
            Self::Identity => Some(Self::Experience),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Expertise => "Expertise",
            Self::Experience => "Experience",
            Self::Identity => "Identity",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
