use crate::directory_commands::DirectoryArgs;

use guild_core::{Availability, Category, SortKey};

#[test]
fn given_no_flags_when_converted_then_default_state() {
    let state = DirectoryArgs::default().to_state().unwrap();

    assert_eq!(state.page(), 1);
    assert_eq!(state.sort(), SortKey::RatingDesc);
    assert!(state.filter().category.is_none());
    assert!(state.filter().max_rate.is_none());
}

#[test]
fn given_filters_sort_and_page_when_converted_then_page_survives() {
    let args = DirectoryArgs {
        search: Some("chia".to_string()),
        category: Some("farming".to_string()),
        min_rating: Some(4.5),
        availability: Some("limited".to_string()),
        max_rate: Some(3.0),
        sort: Some("name-asc".to_string()),
        page: Some(3),
    };

    let state = args.to_state().unwrap();

    assert_eq!(state.filter().search, "chia");
    assert_eq!(state.filter().category, Some(Category::Farming));
    assert_eq!(state.filter().min_rating, 4.5);
    assert_eq!(state.filter().availability, Some(Availability::Limited));
    assert_eq!(state.filter().max_rate, Some(3.0));
    assert_eq!(state.sort(), SortKey::NameAsc);
    assert_eq!(state.page(), 3);
}

#[test]
fn given_all_when_converted_then_no_category_or_availability_filter() {
    let args = DirectoryArgs {
        category: Some("ALL".to_string()),
        availability: Some("all".to_string()),
        ..DirectoryArgs::default()
    };

    let state = args.to_state().unwrap();

    assert!(state.filter().category.is_none());
    assert!(state.filter().availability.is_none());
}

#[test]
fn given_unknown_values_when_converted_then_rejected() {
    for args in [
        DirectoryArgs {
            category: Some("gardening".to_string()),
            ..DirectoryArgs::default()
        },
        DirectoryArgs {
            sort: Some("sideways".to_string()),
            ..DirectoryArgs::default()
        },
        DirectoryArgs {
            min_rating: Some(7.0),
            ..DirectoryArgs::default()
        },
        DirectoryArgs {
            max_rate: Some(-1.0),
            ..DirectoryArgs::default()
        },
    ] {
        assert!(args.to_state().is_err(), "{args:?} should be rejected");
    }
}
