//! Request and response bodies of the data layer proxy

use serde::{Deserialize, Serialize};

pub const GET_KEYS_VALUES_PATH: &str = "/api/datalayer/get_keys_values";
pub const GET_VALUE_PATH: &str = "/api/datalayer/get_value";
pub const BATCH_UPDATE_PATH: &str = "/api/datalayer/batch_update";

#[derive(Debug, Serialize)]
pub(crate) struct StoreRequest<'a> {
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetValueRequest<'a> {
    pub id: &'a str,
    pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchUpdateRequest<'a> {
    pub id: &'a str,
    pub changelist: &'a [Change],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Insert,
}

/// One entry of a batch update; key and value are hex envelopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub action: ChangeAction,
    pub key: String,
    pub value: String,
}

impl Change {
    pub fn insert(key: String, value: String) -> Self {
        Self {
            action: ChangeAction::Insert,
            key,
            value,
        }
    }
}

/// Raw hex key/value pair as listed by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Common envelope of every data layer response
pub(crate) trait Envelope {
    fn success(&self) -> bool;
    fn error(&self) -> Option<&str>;
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeysValuesResponse {
    pub success: bool,
    #[serde(default)]
    pub keys_values: Vec<KeyValue>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValueResponse {
    pub success: bool,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchUpdateResponse {
    pub success: bool,
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

macro_rules! impl_envelope {
    ($($response:ty),*) => {
        $(
            impl Envelope for $response {
                fn success(&self) -> bool {
                    self.success
                }

                fn error(&self) -> Option<&str> {
                    self.error.as_deref()
                }
            }
        )*
    };
}

impl_envelope!(KeysValuesResponse, ValueResponse, BatchUpdateResponse);
