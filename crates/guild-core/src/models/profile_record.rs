use crate::{Availability, Category, Education, Experience};

use serde::{Deserialize, Serialize};

/// A professional profile as stored in the data layer.
///
/// Directory listings carry only the summary fields; full registrations also
/// carry the contact, wallet and history fields. Absent optional fields are
/// omitted from the JSON so a record survives an encode/decode cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: i64,
    pub did: String,

    // Listing
    pub name: String,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub skills: Vec<String>,
    pub rate: f64,
    pub availability: Availability,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    // Full registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experiences: Vec<Experience>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<Education>,
}

impl ProfileRecord {
    /// Summary record as shown on a directory card
    #[allow(clippy::too_many_arguments)]
    pub fn listing(
        id: i64,
        did: String,
        name: String,
        title: String,
        category: Category,
        skills: Vec<String>,
        rate: f64,
        availability: Availability,
    ) -> Self {
        Self {
            id,
            did,
            name,
            title,
            category,
            skills,
            rate,
            availability,
            rating: 0.0,
            review_count: 0,
            avatar: None,
            about: None,
            location: None,
            email: None,
            wallet_address: None,
            experiences: Vec::new(),
            education: Vec::new(),
        }
    }

    /// Whether the record carries the fields only a full registration has
    pub fn is_full_registration(&self) -> bool {
        self.about.is_some() || self.email.is_some() || self.wallet_address.is_some()
    }
}
