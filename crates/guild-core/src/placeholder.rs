use crate::{Availability, Category, ProfileRecord};

use rand::Rng;
use rand::seq::IndexedRandom;

/// Size of the placeholder directory
pub const PLACEHOLDER_COUNT: usize = 50;

/// Every Nth placeholder profile is unavailable
const UNAVAILABLE_EVERY: i64 = 10;

/// Share of the remaining profiles listed as available rather than limited
const AVAILABLE_SHARE: f64 = 0.7;

struct CategoryTable {
    names: &'static [&'static str],
    titles: &'static [&'static str],
    skills: &'static [&'static str],
    rate_range: (f64, f64),
}

fn table(category: Category) -> CategoryTable {
    match category {
        Category::Developer => CategoryTable {
            names: &["Ada Nakamura", "Luis Ortega", "Priya Raman", "Tom Becker"],
            titles: &[
                "Chialisp Developer",
                "Smart Coin Engineer",
                "Full-Stack dApp Developer",
            ],
            skills: &[
                "Chialisp",
                "Rust",
                "TypeScript",
                "Offer Files",
                "CATs",
                "NFT1",
                "Python",
            ],
            rate_range: (1.5, 4.0),
        },
        Category::Farming => CategoryTable {
            names: &["Greta Holm", "Marcus Reid", "Yuki Sato", "Omar Haddad"],
            titles: &["Farming Consultant", "Plotting Specialist", "Pool Operator"],
            skills: &[
                "Plotting",
                "Harvester Tuning",
                "Pool Protocol",
                "Bladebit",
                "Storage Planning",
                "Linux",
            ],
            rate_range: (0.5, 2.0),
        },
        Category::Data => CategoryTable {
            names: &["Ines Duarte", "Kofi Mensah", "Hanna Lind", "Ravi Kapoor"],
            titles: &["Blockchain Data Analyst", "DataLayer Engineer", "Indexer Developer"],
            skills: &[
                "DataLayer",
                "SQL",
                "Analytics",
                "Indexing",
                "Python",
                "Dashboards",
            ],
            rate_range: (1.0, 3.0),
        },
        Category::Security => CategoryTable {
            names: &["Nora Feld", "Diego Marin", "Sasha Volkov", "Amara Obi"],
            titles: &["Smart Coin Auditor", "Security Researcher", "Key Management Advisor"],
            skills: &[
                "Audits",
                "Formal Verification",
                "Threat Modeling",
                "BLS Signatures",
                "Custody",
                "Penetration Testing",
            ],
            rate_range: (2.5, 5.0),
        },
        Category::AiOps => CategoryTable {
            names: &["Leo Brandt", "Mei Chen", "Tariq Aziz", "Julia Novak"],
            titles: &["AI Operations Engineer", "ML Pipeline Engineer", "Agent Developer"],
            skills: &[
                "LLM Ops",
                "Model Serving",
                "Python",
                "Agents",
                "Vector Search",
                "Monitoring",
            ],
            rate_range: (1.5, 4.5),
        },
        Category::Infrastructure => CategoryTable {
            names: &["Erik Dahl", "Fatima Noor", "Sam Porter", "Lena Vogel"],
            titles: &["Node Infrastructure Engineer", "DevOps Engineer", "Full Node Operator"],
            skills: &[
                "Kubernetes",
                "Terraform",
                "Full Nodes",
                "Monitoring",
                "Networking",
                "Docker",
            ],
            rate_range: (1.0, 3.5),
        },
    }
}

/// Synthetic directory shown when the data layer cannot be read.
///
/// The shape is fixed (count, id sequence, DIDs, availability pattern); names,
/// titles, skills, rates and ratings are random.
pub fn generate_placeholder_profiles<R: Rng + ?Sized>(rng: &mut R) -> Vec<ProfileRecord> {
    (1..=PLACEHOLDER_COUNT as i64)
        .map(|id| placeholder_profile(id, rng))
        .collect()
}

fn placeholder_profile<R: Rng + ?Sized>(id: i64, rng: &mut R) -> ProfileRecord {
    let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
    let table = table(category);

    let skill_count = rng.random_range(2..=4);
    let skills = table
        .skills
        .choose_multiple(rng, skill_count)
        .map(|skill| skill.to_string())
        .collect();

    let availability = if id % UNAVAILABLE_EVERY == 0 {
        Availability::Unavailable
    } else if rng.random_bool(AVAILABLE_SHARE) {
        Availability::Available
    } else {
        Availability::Limited
    };

    let (min_rate, max_rate) = table.rate_range;
    let rate = round_tenths(rng.random_range(min_rate..=max_rate));

    let mut profile = ProfileRecord::listing(
        id,
        format!("did:chia:placeholder-{id:04}"),
        pick(table.names, rng),
        pick(table.titles, rng),
        category,
        skills,
        rate,
        availability,
    );
    profile.rating = round_tenths(rng.random_range(4.0..=5.0));
    profile.review_count = rng.random_range(3..=180);
    profile
}

fn pick<R: Rng + ?Sized>(options: &[&str], rng: &mut R) -> String {
    options
        .choose(rng)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
