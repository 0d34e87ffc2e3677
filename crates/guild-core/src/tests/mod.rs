mod codec;
mod placeholder;

use crate::{Availability, Category, ProfileRecord};

/// Listing record with sensible defaults
pub(crate) fn create_test_profile(id: i64, name: &str) -> ProfileRecord {
    let mut profile = ProfileRecord::listing(
        id,
        format!("did:chia:test-{id}"),
        name.to_string(),
        "Chialisp Developer".to_string(),
        Category::Developer,
        vec!["Chialisp".to_string(), "Rust".to_string()],
        2.0,
        Availability::Available,
    );
    profile.rating = 4.5;
    profile.review_count = 10;
    profile
}
