//! Data layer access for the guild directory.
//!
//! [`DataLayerClient`] speaks the proxy's three operations; [`ProfileDirectory`],
//! [`ProfileDetail`] and [`RegistrationSubmitter`] build the read and write
//! paths on top of it.

pub(crate) mod client;
pub(crate) mod directory;
pub(crate) mod fetch_outcome;
pub(crate) mod in_flight;
pub(crate) mod profile_detail;
pub(crate) mod registration;

#[cfg(test)]
mod tests;

pub use client::{
    BATCH_UPDATE_PATH, Change, ChangeAction, ClientError, ClientResult, DataLayerClient,
    GET_KEYS_VALUES_PATH, GET_VALUE_PATH, KeyValue,
};
pub use directory::{ProfileDirectory, decode_pairs};
pub use fetch_outcome::FetchOutcome;
pub use in_flight::{InFlight, InFlightGuard};
pub use profile_detail::ProfileDetail;
pub use registration::RegistrationSubmitter;
