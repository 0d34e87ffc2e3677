use crate::{ClientError, DataLayerClient, FetchOutcome, InFlight, KeyValue};

use guild_core::{ProfileRecord, decode_record, generate_placeholder_profiles};

use log::{info, warn};

/// Reads the whole profile directory from the data layer.
///
/// Any failure to obtain real data is answered with the placeholder
/// directory, tagged as [`FetchOutcome::Fallback`]. Results are not cached.
pub struct ProfileDirectory {
    client: DataLayerClient,
    in_flight: InFlight,
}

impl ProfileDirectory {
    pub fn new(client: DataLayerClient) -> Self {
        Self {
            client,
            in_flight: InFlight::new(),
        }
    }

    pub async fn load_all(&self) -> FetchOutcome<Vec<ProfileRecord>> {
        let Some(_guard) = self.in_flight.try_begin() else {
            return FetchOutcome::Failed(ClientError::busy("directory load"));
        };

        let pairs = match self.client.get_keys_values().await {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!("Directory load failed, showing placeholder profiles: {e}");
                return placeholder(e.to_string());
            }
        };

        let profiles = decode_pairs(&pairs);
        if profiles.is_empty() {
            warn!(
                "Store returned {} pairs but no decodable profiles, showing placeholder profiles",
                pairs.len()
            );
            return placeholder("store returned no decodable profiles".to_string());
        }

        info!(
            "Loaded {} profiles ({} dropped)",
            profiles.len(),
            pairs.len() - profiles.len()
        );
        FetchOutcome::Live(profiles)
    }
}

/// Decode every pair, dropping (and logging) the ones that fail
pub fn decode_pairs(pairs: &[KeyValue]) -> Vec<ProfileRecord> {
    pairs
        .iter()
        .filter_map(|pair| match decode_record(&pair.value) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Dropping undecodable record {}: {e}", pair.key);
                None
            }
        })
        .collect()
}

fn placeholder(reason: String) -> FetchOutcome<Vec<ProfileRecord>> {
    FetchOutcome::Fallback {
        data: generate_placeholder_profiles(&mut rand::rng()),
        reason,
    }
}
