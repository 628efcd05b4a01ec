use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use super::Step;
use crate::error::KpiError;
use crate::kpi::{KpiKind, KpiList, KpiSelection};

/// Opaque handle to a logo image: a URL, a `file://` reference, or whatever
/// the caller's upload collaborator hands back. Never dereferenced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogoRef(String);

impl LogoRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Turns what a user typed into a reference. Existing local paths
    /// (with `~` expanded) become absolute `file://` URLs; anything else is
    /// kept verbatim.
    pub fn from_user_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        let expanded = shellexpand::tilde(trimmed).to_string();
        let path = Path::new(&expanded);
        if path.is_file()
            && let Ok(absolute) = path.canonicalize()
            && let Ok(url) = url::Url::from_file_path(&absolute)
        {
            return Self(url.to_string());
        }
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for LogoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum VideoTone {
    Friendly,
    Professional,
    #[serde(rename = "Data-driven")]
    DataDriven,
}

impl VideoTone {
    pub fn label(self) -> &'static str {
        match self {
            Self::Friendly => "Friendly",
            Self::Professional => "Professional",
            Self::DataDriven => "Data-driven",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Friendly => "Warm and conversational tone",
            Self::Professional => "Business-focused and formal",
            Self::DataDriven => "Numbers-focused and analytical",
        }
    }

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::iter().find(|tone| tone.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for VideoTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgencyInfo {
    pub email: String,
    pub name: String,
    pub logo: LogoRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    pub logo: LogoRef,
    pub reporting_period: String,
    pub account_manager: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CampaignInfo {
    pub monthly_goal: String,
    pub main_result: String,
    pub raw_metrics: String,
    pub best_campaign: String,
    pub best_campaign_reason: String,
    pub what_didnt_work: String,
    pub user_behavior_changes: String,
    pub next_period_improvements: String,
    pub upcoming_campaigns: String,
    pub strategic_recommendations: String,
    pub video_tone: Option<VideoTone>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgencyPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub logo: Option<LogoRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub logo: Option<LogoRef>,
    pub reporting_period: Option<String>,
    pub account_manager: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignPatch {
    pub monthly_goal: Option<String>,
    pub main_result: Option<String>,
    pub raw_metrics: Option<String>,
    pub best_campaign: Option<String>,
    pub best_campaign_reason: Option<String>,
    pub what_didnt_work: Option<String>,
    pub user_behavior_changes: Option<String>,
    pub next_period_improvements: Option<String>,
    pub upcoming_campaigns: Option<String>,
    pub strategic_recommendations: Option<String>,
    pub video_tone: Option<VideoTone>,
}

/// A partial update to one top-level group. Within a group only `Some`
/// fields overwrite; the KPI list is always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatePatch {
    Agency(AgencyPatch),
    Client(ClientPatch),
    Campaign(CampaignPatch),
    Kpis(Vec<KpiSelection>),
}

impl StatePatch {
    fn group(&self) -> &'static str {
        match self {
            Self::Agency(_) => "agency",
            Self::Client(_) => "client",
            Self::Campaign(_) => "campaign",
            Self::Kpis(_) => "kpis",
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardState {
    #[serde(skip)]
    step: Step,
    agency: AgencyInfo,
    client: ClientInfo,
    campaign: CampaignInfo,
    kpis: KpiList,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub fn agency(&self) -> &AgencyInfo {
        &self.agency
    }

    pub fn client(&self) -> &ClientInfo {
        &self.client
    }

    pub fn campaign(&self) -> &CampaignInfo {
        &self.campaign
    }

    pub fn kpis(&self) -> &KpiList {
        &self.kpis
    }

    /// Merges `patch` into its group. No validation happens here.
    pub fn update(&mut self, patch: StatePatch) -> &Self {
        tracing::debug!(group = patch.group(), "state update");
        match patch {
            StatePatch::Agency(p) => {
                merge(&mut self.agency.email, p.email);
                merge(&mut self.agency.name, p.name);
                merge(&mut self.agency.logo, p.logo);
            }
            StatePatch::Client(p) => {
                merge(&mut self.client.name, p.name);
                merge(&mut self.client.logo, p.logo);
                merge(&mut self.client.reporting_period, p.reporting_period);
                merge(&mut self.client.account_manager, p.account_manager);
            }
            StatePatch::Campaign(p) => {
                let c = &mut self.campaign;
                merge(&mut c.monthly_goal, p.monthly_goal);
                merge(&mut c.main_result, p.main_result);
                merge(&mut c.raw_metrics, p.raw_metrics);
                merge(&mut c.best_campaign, p.best_campaign);
                merge(&mut c.best_campaign_reason, p.best_campaign_reason);
                merge(&mut c.what_didnt_work, p.what_didnt_work);
                merge(&mut c.user_behavior_changes, p.user_behavior_changes);
                merge(&mut c.next_period_improvements, p.next_period_improvements);
                merge(&mut c.upcoming_campaigns, p.upcoming_campaigns);
                merge(&mut c.strategic_recommendations, p.strategic_recommendations);
                if p.video_tone.is_some() {
                    c.video_tone = p.video_tone;
                }
            }
            StatePatch::Kpis(entries) => {
                self.kpis.replace(entries);
            }
        }
        self
    }

    /// Appends an empty KPI slot (or one of `kind`) and returns its index.
    pub fn add_kpi(&mut self, kind: Option<KpiKind>) -> Result<usize, KpiError> {
        let selection = kind.map_or_else(KpiSelection::new, KpiSelection::of_kind);
        self.kpis.push(selection)
    }

    pub fn remove_kpi(&mut self, index: usize) -> Result<KpiSelection, KpiError> {
        self.kpis.remove(index)
    }

    /// Mutable access to one slot. [`KpiSelection`] recomputes its value on
    /// every edit, so handing it out keeps the list consistent.
    pub fn kpi_mut(&mut self, index: usize) -> Result<&mut KpiSelection, KpiError> {
        self.kpis.get_mut(index).ok_or(KpiError::NoSuchEntry(index))
    }
}
