use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::kpi::HighlightKpi;
use crate::wizard::WizardState;

/// JSON body of the report webhook. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub email: String,
    pub agency_name: String,
    pub agency_logo: String,
    pub client_name: String,
    pub client_logo: String,
    pub report_period: String,
    pub account_manager: String,
    pub video_tone: String,
    pub metrics_raw: String,
    pub monthly_goal: String,
    pub main_result: String,
    pub best_campaign: String,
    pub best_campaign_reason: String,
    pub what_didnt_work: String,
    pub user_behavior_changes: String,
    pub next_period_improvements: String,
    pub upcoming_campaigns: String,
    pub strategic_recommendations: String,
    pub highlight_kpis: Vec<HighlightKpi>,
    pub timestamp: String,
    #[serde(rename = "triggered_from")]
    pub triggered_from: String,
}

/// Builds the webhook body. Pure: the clock is passed in.
///
/// `metricsRaw` is the pasted text exactly as entered; the receiver parses
/// it again on its side.
pub fn assemble(state: &WizardState, source_tag: &str, now: DateTime<Utc>) -> Payload {
    let agency = state.agency();
    let client = state.client();
    let campaign = state.campaign();

    Payload {
        email: agency.email.clone(),
        agency_name: agency.name.clone(),
        agency_logo: agency.logo.as_str().to_string(),
        client_name: client.name.clone(),
        client_logo: client.logo.as_str().to_string(),
        report_period: client.reporting_period.clone(),
        account_manager: client.account_manager.clone(),
        video_tone: campaign
            .video_tone
            .map(|tone| tone.label().to_string())
            .unwrap_or_default(),
        metrics_raw: campaign.raw_metrics.clone(),
        monthly_goal: campaign.monthly_goal.clone(),
        main_result: campaign.main_result.clone(),
        best_campaign: campaign.best_campaign.clone(),
        best_campaign_reason: campaign.best_campaign_reason.clone(),
        what_didnt_work: campaign.what_didnt_work.clone(),
        user_behavior_changes: campaign.user_behavior_changes.clone(),
        next_period_improvements: campaign.next_period_improvements.clone(),
        upcoming_campaigns: campaign.upcoming_campaigns.clone(),
        strategic_recommendations: campaign.strategic_recommendations.clone(),
        highlight_kpis: state.kpis().highlights(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        triggered_from: source_tag.to_string(),
    }
}
