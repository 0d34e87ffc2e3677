use crate::{Change, ClientError, ClientResult, DataLayerClient, InFlight};

use guild_core::{Confirmation, ProfileRecord, RegistrationWizard, encode_record, store_key};

use chrono::Utc;
use log::info;

/// Writes a finished registration to the data layer as one insert
pub struct RegistrationSubmitter {
    client: DataLayerClient,
    in_flight: InFlight,
}

impl RegistrationSubmitter {
    pub fn new(client: DataLayerClient) -> Self {
        Self {
            client,
            in_flight: InFlight::new(),
        }
    }

    /// Submit the wizard's record.
    ///
    /// Validation failures return before any request is made. On a network
    /// or store failure the wizard stays on its identity step so the user
    /// can resubmit; on success it moves to the submitted phase.
    pub async fn submit(&self, wizard: &mut RegistrationWizard) -> ClientResult<Confirmation> {
        let _guard = self
            .in_flight
            .try_begin()
            .ok_or_else(|| ClientError::busy("registration submit"))?;

        let record = wizard.prepare_submission(Utc::now())?;
        let change = Change::insert(store_key(&record.did), encode_record(&record)?);

        let store_tx_id = self.client.batch_update(&[change]).await?;
        info!(
            "Registered {} (store tx {})",
            record.did,
            store_tx_id.as_deref().unwrap_or("n/a")
        );

        let confirmation = confirm(&record, store_tx_id);
        wizard.complete(confirmation.clone())?;
        Ok(confirmation)
    }
}

fn confirm(record: &ProfileRecord, store_tx_id: Option<String>) -> Confirmation {
    Confirmation::new(record.did.clone(), record.id, store_tx_id, &mut rand::rng())
}
