pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod wire;

pub use client::DataLayerClient;
pub use error::{ClientError, Result as ClientResult};
pub use wire::{
    BATCH_UPDATE_PATH, Change, ChangeAction, GET_KEYS_VALUES_PATH, GET_VALUE_PATH, KeyValue,
};
