use crate::{CliError, CliResult};

use guild_core::{Availability, Education, Experience, RegistrationWizard, is_catalog_area};

use clap::Args;
use log::{debug, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct RegisterArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Professional title
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub location: String,

    /// Professional summary
    #[arg(long)]
    pub summary: String,

    /// Expertise area; repeat for several
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// Hourly rate, a positive number
    #[arg(long)]
    pub rate: f64,

    /// full-time, part-time or contract
    #[arg(long)]
    pub availability: String,

    /// Work history entry as COMPANY:POSITION; repeat for several
    #[arg(long = "experience")]
    pub experiences: Vec<String>,

    /// Education entry as INSTITUTION:DEGREE; repeat for several
    #[arg(long)]
    pub education: Vec<String>,

    /// Wallet address
    #[arg(long)]
    pub wallet: String,

    /// DID to register under; generated when omitted
    #[arg(long)]
    pub did: Option<String>,

    /// Accept the registration terms
    #[arg(long)]
    pub accept_terms: bool,
}

impl RegisterArgs {
    /// Walk a fresh wizard through every step, leaving it on the identity
    /// step ready for submission. Stops at the first step that fails
    /// validation.
    pub fn drive(&self) -> CliResult<RegistrationWizard> {
        let mut wizard = RegistrationWizard::new();

        let personal = &mut wizard.form_mut().personal;
        personal.full_name = self.name.clone();
        personal.title = self.title.clone();
        personal.email = self.email.clone();
        personal.location = self.location.clone();
        personal.summary = self.summary.clone();
        wizard.next()?;

        for skill in &self.skills {
            if !is_catalog_area(skill) {
                warn!("Expertise area '{skill}' is not in the catalog; registering it as given");
            }
        }
        let availability: Availability = self.availability.trim().parse()?;
        if !Availability::REGISTRATION_OPTIONS.contains(&availability) {
            warn!("Availability '{availability}' is not a registration option");
        }
        let expertise = &mut wizard.form_mut().expertise;
        for skill in &self.skills {
            expertise.select_area(skill);
        }
        expertise.hourly_rate = Some(self.rate);
        expertise.availability = Some(availability);
        wizard.next()?;

        let background = &mut wizard.form_mut().background;
        background.experiences = self
            .experiences
            .iter()
            .map(|entry| parse_pair("--experience", entry).map(|(c, p)| Experience::new(c, p)))
            .collect::<CliResult<_>>()?;
        background.education = self
            .education
            .iter()
            .map(|entry| parse_pair("--education", entry).map(|(i, d)| Education::new(i, d)))
            .collect::<CliResult<_>>()?;
        wizard.next()?;

        let identity = &mut wizard.form_mut().identity;
        identity.wallet_address = self.wallet.clone();
        identity.did = self.did.clone();
        identity.terms_accepted = self.accept_terms;

        debug!("Registration form complete for {}", self.name);
        Ok(wizard)
    }
}

/// Split `LEFT:RIGHT` on the first colon
pub(crate) fn parse_pair(argument: &'static str, value: &str) -> CliResult<(String, String)> {
    let (left, right) = value.split_once(':').ok_or_else(|| {
        CliError::invalid_argument(argument, format!("'{value}' is not in LEFT:RIGHT form"))
    })?;
    Ok((left.trim().to_string(), right.trim().to_string()))
}
