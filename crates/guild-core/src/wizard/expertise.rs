/// Expertise areas offered on the registration form
pub const EXPERTISE_AREAS: [&str; 12] = [
    "Chialisp Developer",
    "Smart Coin Auditor",
    "dApp Frontend Developer",
    "Offer File Integration",
    "DataLayer Engineer",
    "Farming & Plotting",
    "Pool Operations",
    "Node Infrastructure",
    "Security Research",
    "AI Operations",
    "Data Analytics",
    "Technical Writing",
];

pub fn is_catalog_area(area: &str) -> bool {
    EXPERTISE_AREAS.contains(&area)
}
