use crate::CliResult;

use guild_core::{decode_record, decode_text, store_key};

use clap::Subcommand;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum CodecCommands {
    /// Print the store key for a DID
    EncodeKey {
        /// Decentralized identifier
        did: String,
    },
    /// Decode a hex envelope, showing the profile when it holds one
    Decode {
        /// Hex string, with or without a 0x prefix
        hex: String,
    },
}

impl CodecCommands {
    pub fn execute(&self) -> CliResult<Value> {
        match self {
            CodecCommands::EncodeKey { did } => Ok(json!({
                "did": did,
                "key": store_key(did),
            })),
            CodecCommands::Decode { hex } => {
                let text = decode_text(hex)?;
                let profile = decode_record(hex).ok();
                Ok(json!({
                    "text": text,
                    "profile": profile,
                }))
            }
        }
    }
}
