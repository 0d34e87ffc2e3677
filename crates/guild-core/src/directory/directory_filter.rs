use crate::{Availability, Category, ProfileRecord};

use serde::{Deserialize, Serialize};

/// Filter criteria applied to the directory. All predicates are ANDed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DirectoryFilter {
    /// Case-insensitive substring over name, title and skills
    pub search: String,
    /// `None` means all categories
    pub category: Option<Category>,
    pub min_rating: f64,
    /// `None` means any availability
    pub availability: Option<Availability>,
    /// `None` means no upper bound
    pub max_rate: Option<f64>,
}

impl DirectoryFilter {
    pub fn matches(&self, profile: &ProfileRecord) -> bool {
        self.matches_search(profile)
            && self.matches_category(profile)
            && profile.rating >= self.min_rating
            && self.matches_availability(profile)
            && self.matches_rate(profile)
    }

    pub fn matches_search(&self, profile: &ProfileRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let query = self.search.to_lowercase();
        profile.name.to_lowercase().contains(&query)
            || profile.title.to_lowercase().contains(&query)
            || profile
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&query))
    }

    fn matches_category(&self, profile: &ProfileRecord) -> bool {
        self.category.is_none_or(|category| profile.category == category)
    }

    fn matches_availability(&self, profile: &ProfileRecord) -> bool {
        self.availability
            .is_none_or(|availability| profile.availability == availability)
    }

    fn matches_rate(&self, profile: &ProfileRecord) -> bool {
        self.max_rate.is_none_or(|max_rate| profile.rate <= max_rate)
    }

    /// Keep matching profiles, preserving their order
    pub fn apply<'a>(&self, profiles: &'a [ProfileRecord]) -> Vec<&'a ProfileRecord> {
        profiles
            .iter()
            .filter(|profile| self.matches(profile))
            .collect()
    }
}
