use crate::{Availability, PLACEHOLDER_COUNT, generate_placeholder_profiles};

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn given_any_seed_when_generated_then_fifty_profiles_with_unique_dids() {
    let mut rng = StdRng::seed_from_u64(7);

    let profiles = generate_placeholder_profiles(&mut rng);

    assert_eq!(profiles.len(), PLACEHOLDER_COUNT);
    let dids: HashSet<&str> = profiles.iter().map(|p| p.did.as_str()).collect();
    assert_eq!(dids.len(), PLACEHOLDER_COUNT);
}

#[test]
fn given_generated_profiles_then_every_tenth_is_unavailable_and_others_are_not() {
    let mut rng = StdRng::seed_from_u64(11);

    for profile in generate_placeholder_profiles(&mut rng) {
        if profile.id % 10 == 0 {
            assert_eq!(profile.availability, Availability::Unavailable);
        } else {
            assert!(matches!(
                profile.availability,
                Availability::Available | Availability::Limited
            ));
        }
    }
}

#[test]
fn given_generated_profiles_then_fields_within_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(99);

    for profile in generate_placeholder_profiles(&mut rng) {
        assert!((2..=4).contains(&profile.skills.len()));
        let unique: HashSet<&String> = profile.skills.iter().collect();
        assert_eq!(unique.len(), profile.skills.len());
        assert!((4.0..=5.0).contains(&profile.rating));
        assert!(profile.rate > 0.0);
        assert!(!profile.name.is_empty());
        assert!(!profile.title.is_empty());
        assert!(!profile.is_full_registration());
    }
}
