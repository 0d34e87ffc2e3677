pub mod codec;
pub mod directory;
pub mod error;
pub mod models;
pub mod placeholder;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use codec::hex_envelope::{decode_record, decode_text, encode_record, encode_text, store_key};
pub use directory::PAGE_SIZE;
pub use directory::directory_filter::DirectoryFilter;
pub use directory::directory_page::DirectoryPage;
pub use directory::directory_state::DirectoryState;
pub use directory::sort_key::{SortKey, compare_names};
pub use error::{CoreError, CoreResult};
pub use models::availability::Availability;
pub use models::category::Category;
pub use models::education::Education;
pub use models::experience::Experience;
pub use models::profile_record::ProfileRecord;
pub use placeholder::{PLACEHOLDER_COUNT, generate_placeholder_profiles};
pub use wizard::confirmation::{Confirmation, pseudo_transaction_id};
pub use wizard::expertise::{EXPERTISE_AREAS, is_catalog_area};
pub use wizard::registration_form::{
    BackgroundInfo, ExpertiseInfo, IdentityInfo, PersonalInfo, RegistrationForm,
};
pub use wizard::registration_wizard::{
    DEFAULT_CATEGORY, DEFAULT_RATING, RegistrationWizard, WizardPhase, generate_did,
};
pub use wizard::wizard_step::WizardStep;
