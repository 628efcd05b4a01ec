//! Per-step validation. Validators are pure: they read the state and report
//! every failing field at once, keyed by [`Field`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use super::{Step, WizardState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    AgencyName,
    AgencyLogo,
    ClientName,
    ClientLogo,
    ReportingPeriod,
    AccountManager,
    MonthlyGoal,
    MainResult,
    RawMetrics,
    BestCampaign,
    WhatDidntWork,
    VideoTone,
}

impl Field {
    /// Stable key, matching the payload naming.
    pub fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::AgencyName => "agencyName",
            Self::AgencyLogo => "agencyLogo",
            Self::ClientName => "clientName",
            Self::ClientLogo => "clientLogo",
            Self::ReportingPeriod => "reportPeriod",
            Self::AccountManager => "accountManager",
            Self::MonthlyGoal => "monthlyGoal",
            Self::MainResult => "mainResult",
            Self::RawMetrics => "metricsRaw",
            Self::BestCampaign => "bestCampaign",
            Self::WhatDidntWork => "whatDidntWork",
            Self::VideoTone => "videoTone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::AgencyName => "Agency name",
            Self::AgencyLogo => "Agency logo",
            Self::ClientName => "Client name",
            Self::ClientLogo => "Client logo",
            Self::ReportingPeriod => "Reporting period",
            Self::AccountManager => "Account manager",
            Self::MonthlyGoal => "Monthly goal",
            Self::MainResult => "Main result",
            Self::RawMetrics => "Campaign data",
            Self::BestCampaign => "Best campaign",
            Self::WhatDidntWork => "What didn't work",
            Self::VideoTone => "Video tone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Failing fields and their messages. Empty means the step may advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    fn require(&mut self, field: Field, value: &str, message: &str) {
        if is_blank(value) {
            self.insert(field, message);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.key())?;
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Some non-space text, `@`, non-space text, `.`, non-space text. Not
/// anchored, so surrounding text is accepted.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Loose shape check, not address validation.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn validate_basics(state: &WizardState) -> FieldErrors {
    let agency = state.agency();
    let mut errors = FieldErrors::new();
    if is_blank(&agency.email) {
        errors.insert(Field::Email, "Email is required");
    } else if !looks_like_email(&agency.email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }
    errors.require(Field::AgencyName, &agency.name, "Agency name is required");
    errors.require(Field::AgencyLogo, agency.logo.as_str(), "Agency logo is required");
    errors
}

pub fn validate_client(state: &WizardState) -> FieldErrors {
    let client = state.client();
    let mut errors = FieldErrors::new();
    errors.require(Field::ClientName, &client.name, "Client name is required");
    errors.require(Field::ClientLogo, client.logo.as_str(), "Client logo is required");
    errors.require(
        Field::ReportingPeriod,
        &client.reporting_period,
        "Reporting period is required",
    );
    errors.require(
        Field::AccountManager,
        &client.account_manager,
        "Account manager name is required",
    );
    errors
}

pub fn validate_data(state: &WizardState) -> FieldErrors {
    let campaign = state.campaign();
    let mut errors = FieldErrors::new();
    errors.require(Field::MonthlyGoal, &campaign.monthly_goal, "Monthly goal is required");
    errors.require(Field::MainResult, &campaign.main_result, "Main result is required");
    errors.require(Field::RawMetrics, &campaign.raw_metrics, "Campaign data is required");
    errors.require(Field::BestCampaign, &campaign.best_campaign, "Best campaign is required");
    errors.require(
        Field::WhatDidntWork,
        &campaign.what_didnt_work,
        "Please describe what didn't work",
    );
    if campaign.video_tone.is_none() {
        errors.insert(Field::VideoTone, "Please select a video tone");
    }
    errors
}

/// Errors blocking the move forward from `step`.
pub fn validate(step: Step, state: &WizardState) -> FieldErrors {
    match step {
        Step::Basics => validate_basics(state),
        Step::Client => validate_client(state),
        Step::Data => validate_data(state),
        Step::Generate => FieldErrors::new(),
    }
}

/// Every step's errors merged, for drafts submitted without the wizard.
pub fn validate_all(state: &WizardState) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for step in Step::ALL {
        errors.merge(validate(step, state));
    }
    errors
}
