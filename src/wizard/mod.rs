//! The four-step report wizard: state store, per-step validators and the
//! controller that moves between steps and hands the result to the webhook.

pub mod controller;
pub mod state;
pub mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use controller::{Progress, SubmissionStatus, SubmitReceipt, SubmitTicket, WizardController};
pub use state::{
    AgencyInfo, AgencyPatch, CampaignInfo, CampaignPatch, ClientInfo, ClientPatch, LogoRef,
    StatePatch, VideoTone, WizardState,
};
pub use validate::{Field, FieldErrors, validate, validate_all};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Basics,
    Client,
    Data,
    Generate,
}

impl Step {
    pub const ALL: [Self; 4] = [Self::Basics, Self::Client, Self::Data, Self::Generate];
    pub const TOTAL: u8 = 4;

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Client => 2,
            Self::Data => 3,
            Self::Generate => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.number() == n)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Generate
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basics => "Basic Info",
            Self::Client => "Client Info",
            Self::Data => "Data & KPIs",
            Self::Generate => "Generate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Basics => "Agency details",
            Self::Client => "Client branding",
            Self::Data => "Metrics & tone",
            Self::Generate => "Review & send",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}
