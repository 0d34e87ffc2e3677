use crate::{CoreError, CoreResult, ProfileRecord};

use std::panic::Location;

use error_location::ErrorLocation;

/// Encode text for the data layer.
///
/// Every UTF-16 code unit becomes its lowercase hex value, padded to at least
/// two digits. Code units above 0xff produce wider groups that `decode_text`
/// cannot read back; the store expects one byte per hex pair.
pub fn encode_text(text: &str) -> String {
    text.encode_utf16()
        .map(|unit| format!("{unit:02x}"))
        .collect()
}

/// Decode a hex envelope back into text, one character per byte.
///
/// A leading `0x` is accepted since the data layer reports keys that way.
#[track_caller]
pub fn decode_text(hex_text: &str) -> CoreResult<String> {
    let digits = hex_text
        .strip_prefix("0x")
        .or_else(|| hex_text.strip_prefix("0X"))
        .unwrap_or(hex_text);

    let bytes = hex::decode(digits).map_err(|e| CoreError::Decode {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(bytes.into_iter().map(char::from).collect())
}

/// Store key for a DID
pub fn store_key(did: &str) -> String {
    encode_text(did)
}

#[track_caller]
pub fn encode_record(record: &ProfileRecord) -> CoreResult<String> {
    let json = serde_json::to_string(record).map_err(|e| CoreError::Json {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(encode_text(&json))
}

#[track_caller]
pub fn decode_record(hex_text: &str) -> CoreResult<ProfileRecord> {
    let json = decode_text(hex_text)?;

    serde_json::from_str(&json).map_err(|e| CoreError::Json {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}
