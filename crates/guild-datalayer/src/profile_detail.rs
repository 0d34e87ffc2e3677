use crate::{ClientError, ClientResult, DataLayerClient, FetchOutcome};

use guild_core::{ProfileRecord, decode_record, store_key};

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

/// Loads a single profile by DID.
///
/// The last request wins: when a newer `load` starts before an older one
/// finishes, the older response is discarded as `Superseded`. Unlike the
/// directory there is no placeholder; failures are returned to the caller.
pub struct ProfileDetail {
    client: DataLayerClient,
    latest: AtomicU64,
}

impl ProfileDetail {
    pub fn new(client: DataLayerClient) -> Self {
        Self {
            client,
            latest: AtomicU64::new(0),
        }
    }

    pub async fn load(&self, did: &str) -> FetchOutcome<ProfileRecord> {
        let ticket = self.latest.fetch_add(1, Ordering::AcqRel) + 1;

        let result = self.fetch(did.trim()).await;

        if self.latest.load(Ordering::Acquire) != ticket {
            debug!("Discarding stale response for {did}");
            return FetchOutcome::Failed(ClientError::superseded(did));
        }

        match result {
            Ok(profile) => FetchOutcome::Live(profile),
            Err(e) => {
                warn!("Profile {did} could not be loaded: {e}");
                FetchOutcome::Failed(e)
            }
        }
    }

    async fn fetch(&self, did: &str) -> ClientResult<ProfileRecord> {
        if did.is_empty() {
            return Err(ClientError::not_found(did));
        }

        let value = self
            .client
            .get_value(&store_key(did))
            .await?
            .ok_or_else(|| ClientError::not_found(did))?;

        decode_record(&value).map_err(|source| ClientError::Decode {
            key: did.to_string(),
            source,
        })
    }
}
