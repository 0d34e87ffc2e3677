//! Shared fixtures for the data layer integration tests

#![allow(dead_code)]

use guild_datalayer::DataLayerClient;

use guild_core::{
    Availability, Category, ProfileRecord, RegistrationWizard, encode_record, store_key,
};

use serde_json::{Value, json};

pub const STORE_ID: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub fn client_for(uri: &str) -> DataLayerClient {
    DataLayerClient::with_client(uri, STORE_ID, reqwest::Client::new())
}

pub fn sample_profile(id: i64, name: &str) -> ProfileRecord {
    let mut profile = ProfileRecord::listing(
        id,
        format!("did:chia:sample-{id}"),
        name.to_string(),
        "Security Auditor".to_string(),
        Category::Security,
        vec!["Audits".to_string(), "Chialisp".to_string()],
        3.5,
        Availability::Available,
    );
    profile.rating = 4.8;
    profile.review_count = 12;
    profile
}

/// A `keys_values` entry the way the store lists it
pub fn stored_pair(profile: &ProfileRecord) -> Value {
    json!({
        "key": store_key(&profile.did),
        "value": encode_record(profile).unwrap(),
    })
}

/// Wizard with every required field filled in, sitting on the identity step
pub fn wizard_ready_to_submit() -> RegistrationWizard {
    let mut wizard = RegistrationWizard::new();

    let personal = &mut wizard.form_mut().personal;
    personal.full_name = "Wizard User".to_string();
    personal.title = "Wizard Dev".to_string();
    personal.email = "wizard@example.com".to_string();
    personal.location = "Oz".to_string();
    personal.summary = "A magical dev".to_string();
    wizard.next().unwrap();

    let expertise = &mut wizard.form_mut().expertise;
    expertise.toggle_area("Chialisp Developer");
    expertise.hourly_rate = Some(2.5);
    expertise.availability = Some(Availability::PartTime);
    wizard.next().unwrap();
    wizard.next().unwrap();

    let identity = &mut wizard.form_mut().identity;
    identity.wallet_address = "xch1wizard".to_string();
    identity.terms_accepted = true;
    wizard
}
