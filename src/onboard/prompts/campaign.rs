use anyhow::Result;
use dialoguer::{Confirm, Select};

use crate::metrics::{self, COLUMNS, EXAMPLE};
use crate::ui::style as ui;
use crate::utils::text::plural;
use crate::wizard::{CampaignPatch, VideoTone, WizardState};

use super::super::domain::{PASTE_TERMINATOR, read_pasted_metrics};
use super::super::view::{print_bullet, print_metrics_summary};
use super::text_input;

pub fn prompt_campaign(state: &WizardState) -> Result<CampaignPatch> {
    let campaign = state.campaign();

    print_bullet("How did the period go?");
    println!();
    let monthly_goal = text_input("Monthly goal", &campaign.monthly_goal)?;
    let main_result = text_input("Main result achieved", &campaign.main_result)?;

    println!();
    let raw_metrics = prompt_metrics(&campaign.raw_metrics)?;

    println!();
    let best_campaign = text_input("Best performing campaign", &campaign.best_campaign)?;
    let best_campaign_reason = text_input(
        "Why did it perform best? (optional)",
        &campaign.best_campaign_reason,
    )?;
    let what_didnt_work = text_input("What didn't work", &campaign.what_didnt_work)?;
    let user_behavior_changes = text_input(
        "Changes in user behavior (optional)",
        &campaign.user_behavior_changes,
    )?;
    let next_period_improvements = text_input(
        "Improvements for next period (optional)",
        &campaign.next_period_improvements,
    )?;
    let upcoming_campaigns = text_input(
        "Upcoming campaigns (optional)",
        &campaign.upcoming_campaigns,
    )?;
    let strategic_recommendations = text_input(
        "Strategic recommendations (optional)",
        &campaign.strategic_recommendations,
    )?;

    println!();
    let video_tone = prompt_tone(campaign.video_tone)?;

    Ok(CampaignPatch {
        monthly_goal: Some(monthly_goal),
        main_result: Some(main_result),
        raw_metrics: Some(raw_metrics),
        best_campaign: Some(best_campaign),
        best_campaign_reason: Some(best_campaign_reason),
        what_didnt_work: Some(what_didnt_work),
        user_behavior_changes: Some(user_behavior_changes),
        next_period_improvements: Some(next_period_improvements),
        upcoming_campaigns: Some(upcoming_campaigns),
        strategic_recommendations: Some(strategic_recommendations),
        video_tone: Some(video_tone),
    })
}

fn prompt_metrics(current: &str) -> Result<String> {
    let existing = metrics::count_campaign_lines(current);
    if existing > 0 {
        let keep = Confirm::new()
            .with_prompt(format!(
                "  Keep the {} already pasted?",
                plural(existing, "campaign row")
            ))
            .default(true)
            .interact()?;
        if keep {
            return Ok(current.to_string());
        }
    }

    print_bullet("Paste your campaign rows, one per line (tab, comma or ` | ` separated).");
    print_bullet(&ui::dim(format!("Columns: {}", COLUMNS.join(", "))));
    print_bullet(&ui::dim("The last four columns are optional. Example:"));
    for line in EXAMPLE.lines() {
        println!("      {}", ui::dim(line.trim()));
    }
    print_bullet(&format!(
        "Finish with a line containing only `{PASTE_TERMINATOR}`, or type @path to load a file."
    ));

    let raw = read_pasted_metrics(std::io::stdin().lock())?;
    let records = metrics::parse(&raw);
    if !records.is_empty() {
        println!(
            "  {} {}",
            ui::success("✓"),
            plural(records.len(), "campaign") + " data provided"
        );
        print_metrics_summary(&metrics::summarize(&records));
    }
    Ok(raw)
}

fn prompt_tone(current: Option<VideoTone>) -> Result<VideoTone> {
    let tones = VideoTone::all();
    let items: Vec<String> = tones
        .iter()
        .map(|t| format!("{:<13} {}", t.label(), ui::dim(t.description())))
        .collect();
    let default = current
        .and_then(|c| tones.iter().position(|t| *t == c))
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("  Video tone")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(tones[idx])
}
