use crate::{Availability, Education, Experience};

use serde::{Deserialize, Serialize};

/// Step 1 answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub summary: String,
}

impl PersonalInfo {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.full_name) {
            missing.push("full name");
        }
        if is_blank(&self.title) {
            missing.push("professional title");
        }
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.location) {
            missing.push("location");
        }
        if is_blank(&self.summary) {
            missing.push("summary");
        }
        missing
    }
}

/// Step 2 answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExpertiseInfo {
    /// Selected expertise areas, in selection order
    pub areas: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<Availability>,
}

impl ExpertiseInfo {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.areas.iter().any(|area| !is_blank(area)) {
            missing.push("expertise area");
        }
        if !self
            .hourly_rate
            .is_some_and(|rate| rate.is_finite() && rate > 0.0)
        {
            missing.push("hourly rate");
        }
        if self.availability.is_none() {
            missing.push("availability");
        }
        missing
    }

    /// Select an area, leaving it selected if it already is
    pub fn select_area(&mut self, area: &str) {
        if !self.areas.iter().any(|a| a == area) {
            self.areas.push(area.to_string());
        }
    }

    /// Toggle an area the way a checkbox grid does
    pub fn toggle_area(&mut self, area: &str) {
        if let Some(index) = self.areas.iter().position(|a| a == area) {
            self.areas.remove(index);
        } else {
            self.areas.push(area.to_string());
        }
    }
}

/// Step 3 answers. Nothing here is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BackgroundInfo {
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
}

/// Step 4 answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IdentityInfo {
    pub wallet_address: String,
    /// Generated at submission when left blank
    pub did: Option<String>,
    pub terms_accepted: bool,
}

impl IdentityInfo {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.wallet_address) {
            missing.push("wallet address");
        }
        if !self.terms_accepted {
            missing.push("terms acceptance");
        }
        missing
    }

    /// The DID the user typed, if any
    pub fn provided_did(&self) -> Option<&str> {
        self.did
            .as_deref()
            .map(str::trim)
            .filter(|did| !did.is_empty())
    }
}

/// Everything collected by the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegistrationForm {
    pub personal: PersonalInfo,
    pub expertise: ExpertiseInfo,
    pub background: BackgroundInfo,
    pub identity: IdentityInfo,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
