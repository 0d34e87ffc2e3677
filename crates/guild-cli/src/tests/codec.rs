use crate::{catalog_commands::catalog, codec_commands::CodecCommands};

use guild_core::{Availability, Category, ProfileRecord, encode_record, encode_text};

#[test]
fn given_did_when_encode_key_then_hex_of_each_character() {
    let output = CodecCommands::EncodeKey {
        did: "did:1".to_string(),
    }
    .execute()
    .unwrap();

    assert_eq!(output["key"], "6469643a31");
}

#[test]
fn given_profile_hex_when_decoded_then_profile_included() {
    let profile = ProfileRecord::listing(
        4,
        "did:chia:four".to_string(),
        "Four".to_string(),
        "Pool Operator".to_string(),
        Category::Infrastructure,
        vec![],
        1.0,
        Availability::Available,
    );
    let hex = format!("0x{}", encode_record(&profile).unwrap());

    let output = CodecCommands::Decode { hex }.execute().unwrap();

    assert_eq!(output["profile"]["did"], "did:chia:four");
    assert!(output["text"].as_str().unwrap().starts_with('{'));
}

#[test]
fn given_plain_text_hex_when_decoded_then_profile_null() {
    let output = CodecCommands::Decode {
        hex: encode_text("hello"),
    }
    .execute()
    .unwrap();

    assert_eq!(output["text"], "hello");
    assert!(output["profile"].is_null());
}

#[test]
fn given_invalid_hex_when_decoded_then_error() {
    let result = CodecCommands::Decode {
        hex: "abc".to_string(),
    }
    .execute();

    assert!(result.is_err());
}

#[test]
fn given_catalog_then_lists_every_option() {
    let output = catalog();

    assert_eq!(output["categories"].as_array().unwrap().len(), Category::ALL.len());
    assert_eq!(output["categories"][0]["value"], "developer");
    assert_eq!(output["registration_availability"][1], "part-time");
    assert_eq!(output["sort_keys"][0], "rating-desc");
    assert_eq!(output["expertise_areas"].as_array().unwrap().len(), 12);
}
