use guild_core::{Availability, Category, EXPERTISE_AREAS, SortKey};

use serde_json::{Value, json};

/// Every value the directory and the registration form accept
pub(crate) fn catalog() -> Value {
    let categories: Vec<Value> = Category::ALL
        .iter()
        .map(|category| json!({ "value": category.as_str(), "label": category.label() }))
        .collect();

    json!({
        "categories": categories,
        "availability": Availability::ALL.map(|a| a.as_str()),
        "registration_availability": Availability::REGISTRATION_OPTIONS.map(|a| a.as_str()),
        "sort_keys": SortKey::ALL.map(|key| key.as_str()),
        "expertise_areas": EXPERTISE_AREAS,
    })
}
