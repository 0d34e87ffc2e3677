use crate::client::wire::{
    BatchUpdateRequest, BatchUpdateResponse, Envelope, GetValueRequest, KeysValuesResponse,
    StoreRequest, ValueResponse,
};
use crate::{
    BATCH_UPDATE_PATH, Change, ClientError, ClientResult, GET_KEYS_VALUES_PATH, GET_VALUE_PATH,
    KeyValue,
};

use guild_config::DataLayerConfig;

use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for the data layer proxy.
///
/// Every call is a JSON POST carrying the configured store identifier. The
/// proxy handles authentication with the store; no auth header is sent here.
#[derive(Debug, Clone)]
pub struct DataLayerClient {
    pub base_url: String,
    pub store_id: String,
    client: ReqwestClient,
}

impl DataLayerClient {
    /// Create a client from configuration
    #[track_caller]
    pub fn new(config: &DataLayerConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self::with_client(&config.base_url, &config.store_id, client))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(base_url: &str, store_id: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            store_id: store_id.to_string(),
            client,
        }
    }

    /// POST `body` to `path` and unwrap the response envelope
    async fn post<B, R>(&self, operation: &'static str, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Envelope,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url} ({operation})");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::status(operation, status.as_u16()));
        }

        let text = response.text().await?;
        let envelope: R = serde_json::from_str(&text)?;

        if !envelope.success() {
            return Err(ClientError::rejected(
                operation,
                envelope.error().unwrap_or("success flag was false"),
            ));
        }

        Ok(envelope)
    }

    // =========================================================================
    // Store Operations
    // =========================================================================

    /// List every key/value pair in the store
    pub async fn get_keys_values(&self) -> ClientResult<Vec<KeyValue>> {
        let body = StoreRequest { id: &self.store_id };
        let response: KeysValuesResponse = self
            .post("get_keys_values", GET_KEYS_VALUES_PATH, &body)
            .await?;

        Ok(response.keys_values)
    }

    /// Value stored under a hex key; `None` when the store returned no value
    pub async fn get_value(&self, key: &str) -> ClientResult<Option<String>> {
        let body = GetValueRequest {
            id: &self.store_id,
            key,
        };
        let response: ValueResponse = self.post("get_value", GET_VALUE_PATH, &body).await?;

        Ok(response.value.filter(|value| !value.is_empty()))
    }

    /// Apply a change list; returns the store's transaction id when it sends one
    pub async fn batch_update(&self, changelist: &[Change]) -> ClientResult<Option<String>> {
        let body = BatchUpdateRequest {
            id: &self.store_id,
            changelist,
        };
        let response: BatchUpdateResponse =
            self.post("batch_update", BATCH_UPDATE_PATH, &body).await?;

        Ok(response.tx_id)
    }
}
