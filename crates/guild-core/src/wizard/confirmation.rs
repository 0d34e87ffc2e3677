use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shown once a registration has been written to the data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub did: String,
    pub record_id: i64,
    /// Client-generated display value, not a chain reference
    pub transaction_id: String,
    /// Identifier reported by the data layer, when it sent one
    pub store_tx_id: Option<String>,
}

impl Confirmation {
    pub fn new<R: Rng + ?Sized>(
        did: String,
        record_id: i64,
        store_tx_id: Option<String>,
        rng: &mut R,
    ) -> Self {
        Self {
            did,
            record_id,
            transaction_id: pseudo_transaction_id(rng),
            store_tx_id,
        }
    }
}

/// `0x` followed by 64 random hex digits
pub fn pseudo_transaction_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}
