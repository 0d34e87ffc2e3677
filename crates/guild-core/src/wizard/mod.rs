pub mod confirmation;
pub mod expertise;
pub mod registration_form;
pub mod registration_wizard;
pub mod wizard_step;
