use crate::{
    Category, Confirmation, CoreError, CoreResult, ProfileRecord, RegistrationForm, WizardStep,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::debug;
use uuid::Uuid;

/// Category assigned to every self-registered profile
pub const DEFAULT_CATEGORY: Category = Category::Developer;
/// Starting rating of a new profile
pub const DEFAULT_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub enum WizardPhase {
    Editing(WizardStep),
    Submitted(Confirmation),
}

/// Multi-step registration state machine.
///
/// `next()` validates only the current step. Earlier steps are never
/// re-validated, and a failed validation leaves the step unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationWizard {
    form: RegistrationForm,
    phase: WizardPhase,
}

impl Default for WizardPhase {
    fn default() -> Self {
        Self::Editing(WizardStep::PersonalInfo)
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    /// Current step, `None` once submitted
    pub fn step(&self) -> Option<WizardStep> {
        match self.phase {
            WizardPhase::Editing(step) => Some(step),
            WizardPhase::Submitted(_) => None,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.phase {
            WizardPhase::Submitted(confirmation) => Some(confirmation),
            WizardPhase::Editing(_) => None,
        }
    }

    /// Required fields still empty on `step`
    pub fn missing_fields(&self, step: WizardStep) -> Vec<&'static str> {
        match step {
            WizardStep::PersonalInfo => self.form.personal.missing_fields(),
            WizardStep::Expertise => self.form.expertise.missing_fields(),
            WizardStep::Experience => Vec::new(),
            WizardStep::Identity => self.form.identity.missing_fields(),
        }
    }

    #[track_caller]
    fn validate_step(&self, step: WizardStep) -> CoreResult<()> {
        let fields = self.missing_fields(step);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingRequiredFields {
                step,
                fields,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    #[track_caller]
    fn editing_step(&self) -> CoreResult<WizardStep> {
        self.step().ok_or_else(|| CoreError::InvalidTransition {
            message: "registration already submitted".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Validate the current step and advance
    #[track_caller]
    pub fn next(&mut self) -> CoreResult<WizardStep> {
        let step = self.editing_step()?;
        let next = step.next().ok_or_else(|| CoreError::InvalidTransition {
            message: format!("{step} is the last step; submit the registration instead"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.validate_step(step)?;

        debug!("Registration wizard: {step} -> {next}");
        self.phase = WizardPhase::Editing(next);
        Ok(next)
    }

    /// Go back one step without validating. Stays put on the first step.
    #[track_caller]
    pub fn back(&mut self) -> CoreResult<WizardStep> {
        let step = self.editing_step()?;
        let previous = step.previous().unwrap_or(step);
        self.phase = WizardPhase::Editing(previous);
        Ok(previous)
    }

    /// Assemble the record to insert. Only valid on the identity step with
    /// its required fields filled in. A blank DID is replaced by a generated
    /// one.
    #[track_caller]
    pub fn prepare_submission(&self, now: DateTime<Utc>) -> CoreResult<ProfileRecord> {
        let step = self.editing_step()?;
        if step != WizardStep::Identity {
            return Err(CoreError::InvalidTransition {
                message: format!("cannot submit from the {step} step"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.validate_step(step)?;

        let form = &self.form;
        let hourly_rate = form.expertise.hourly_rate.ok_or_else(|| CoreError::Validation {
            message: "hourly rate is required".to_string(),
            field: Some("hourly_rate".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let availability = form
            .expertise
            .availability
            .ok_or_else(|| CoreError::Validation {
                message: "availability is required".to_string(),
                field: Some("availability".into()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let did = form
            .identity
            .provided_did()
            .map(str::to_string)
            .unwrap_or_else(generate_did);

        Ok(ProfileRecord {
            id: now.timestamp_millis(),
            did,
            name: form.personal.full_name.trim().to_string(),
            title: form.personal.title.trim().to_string(),
            category: DEFAULT_CATEGORY,
            skills: form
                .expertise
                .areas
                .iter()
                .map(|area| area.trim())
                .filter(|area| !area.is_empty())
                .map(str::to_string)
                .collect(),
            rate: hourly_rate,
            availability,
            rating: DEFAULT_RATING,
            review_count: 0,
            avatar: None,
            about: Some(form.personal.summary.trim().to_string()),
            location: Some(form.personal.location.trim().to_string()),
            email: Some(form.personal.email.trim().to_string()),
            wallet_address: Some(form.identity.wallet_address.trim().to_string()),
            experiences: form
                .background
                .experiences
                .iter()
                .filter(|entry| !entry.is_blank())
                .cloned()
                .collect(),
            education: form
                .background
                .education
                .iter()
                .filter(|entry| !entry.is_blank())
                .cloned()
                .collect(),
        })
    }

    /// Enter the terminal phase after the data layer accepted the record
    #[track_caller]
    pub fn complete(&mut self, confirmation: Confirmation) -> CoreResult<()> {
        let step = self.editing_step()?;
        if step != WizardStep::Identity {
            return Err(CoreError::InvalidTransition {
                message: format!("cannot complete registration from the {step} step"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.phase = WizardPhase::Submitted(confirmation);
        Ok(())
    }
}

/// `did:chia:` followed by a random tag
pub fn generate_did() -> String {
    format!("did:chia:{}", Uuid::new_v4().simple())
}
