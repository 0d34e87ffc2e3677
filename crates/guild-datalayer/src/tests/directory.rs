use crate::{KeyValue, decode_pairs};

use guild_core::{Availability, Category, ProfileRecord, encode_record, store_key};

fn stored(record: &ProfileRecord) -> KeyValue {
    KeyValue {
        key: store_key(&record.did),
        value: encode_record(record).unwrap(),
    }
}

fn record(id: i64, name: &str) -> ProfileRecord {
    ProfileRecord::listing(
        id,
        format!("did:chia:unit-{id}"),
        name.to_string(),
        "Farmer".to_string(),
        Category::Farming,
        vec!["Plotting".to_string()],
        1.5,
        Availability::Limited,
    )
}

#[test]
fn given_valid_and_invalid_pairs_when_decoded_then_only_valid_kept_in_order() {
    let first = record(1, "Ada");
    let second = record(2, "Grace");
    let pairs = vec![
        stored(&first),
        KeyValue {
            key: "6b6579".to_string(),
            value: "zz-not-hex".to_string(),
        },
        stored(&second),
        KeyValue {
            key: "6b657932".to_string(),
            // valid hex, not JSON
            value: "68656c6c6f".to_string(),
        },
    ];

    let decoded = decode_pairs(&pairs);

    assert_eq!(decoded, vec![first, second]);
}

#[test]
fn given_no_pairs_when_decoded_then_empty() {
    assert!(decode_pairs(&[]).is_empty());
}
