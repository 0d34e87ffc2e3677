use crate::tests::create_test_profile;
use crate::{
    CoreError, Education, Experience, decode_record, decode_text, encode_record, encode_text,
    store_key,
};

#[test]
fn given_ascii_text_when_encoded_then_two_lowercase_digits_per_char() {
    assert_eq!(encode_text("did:x"), "6469643a78");
    assert_eq!(encode_text("\n"), "0a");
    assert_eq!(encode_text(""), "");
}

#[test]
fn given_latin1_text_when_encoded_and_decoded_then_unchanged() {
    let text = "Zürich café";
    assert_eq!(decode_text(&encode_text(text)).unwrap(), text);
}

#[test]
fn given_code_point_above_255_when_encoded_then_group_is_wider_than_two_digits() {
    // U+20AC EURO SIGN
    assert_eq!(encode_text("€"), "20ac");
    // Read back as two single-byte characters, not the original
    assert_ne!(decode_text(&encode_text("€")).unwrap(), "€");
}

#[test]
fn given_prefixed_hex_when_decoded_then_prefix_ignored() {
    assert_eq!(decode_text("0x6869").unwrap(), "hi");
    assert_eq!(decode_text("0X6869").unwrap(), "hi");
}

#[test]
fn given_uppercase_hex_when_decoded_then_accepted() {
    assert_eq!(decode_text("4A4B").unwrap(), "JK");
}

#[test]
fn given_odd_length_hex_when_decoded_then_decode_error() {
    let result = decode_text("abc");
    assert!(matches!(result, Err(CoreError::Decode { .. })));
}

#[test]
fn given_non_hex_characters_when_decoded_then_decode_error() {
    let result = decode_text("zz11");
    assert!(matches!(result, Err(CoreError::Decode { .. })));
}

#[test]
fn given_valid_hex_of_invalid_json_when_record_decoded_then_json_error() {
    let result = decode_record(&encode_text("{not json"));
    assert!(matches!(result, Err(CoreError::Json { .. })));
}

#[test]
fn given_full_record_when_encoded_and_decoded_then_equal() {
    // Given
    let mut profile = create_test_profile(42, "Renée Dubois");
    profile.about = Some("Builds \"smart coins\" in Chialisp".to_string());
    profile.email = Some("renee@example.com".to_string());
    profile.wallet_address = Some("xch1qqq".to_string());
    profile.experiences = vec![Experience::new("Acme", "Engineer")];
    profile.education = vec![Education::new("EPFL", "MSc")];

    // When
    let hex_value = encode_record(&profile).unwrap();
    let decoded = decode_record(&hex_value).unwrap();

    // Then
    assert_eq!(decoded, profile);
    assert!(hex_value.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_store_key_is_hex_of_did() {
    assert_eq!(store_key("did:chia:1"), encode_text("did:chia:1"));
    assert_eq!(decode_text(&store_key("did:chia:1")).unwrap(), "did:chia:1");
}
