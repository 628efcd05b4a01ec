use crate::error::SubmitError;
use crate::kpi::KpiList;
use crate::metrics::{self, MetricsSummary};
use crate::ui::style as ui;
use crate::wizard::{FieldErrors, Progress, Step, SubmitReceipt, WizardState};

use super::domain::review_rows;

const RULE_WIDTH: usize = 50;

pub fn print_welcome_banner() {
    println!();
    println!("  {}", ui::accent("▶ reportreel"));
    println!("  {}", ui::header("Campaign video report generator"));
    println!(
        "  {}",
        ui::dim("Four short steps. We'll turn your results into a client-ready video.")
    );
    println!();
}

pub fn print_step(progress: Progress, step: Step) {
    println!();
    println!(
        "  {} {}  {}",
        ui::accent(format!("[{}/{}]", progress.current, progress.total)),
        ui::header(step.title()),
        ui::dim(step.description())
    );
    println!("  {}", ui::dim("─".repeat(RULE_WIDTH)));
}

pub fn print_bullet(text: &str) {
    println!("  {} {}", ui::label("›"), text);
}

pub fn print_field_errors(errors: &FieldErrors) {
    println!();
    for (field, message) in errors.iter() {
        println!("  {}", ui::field_error(field, message));
    }
    println!();
}

pub fn print_kpis(kpis: &KpiList) {
    if kpis.is_empty() {
        print_bullet(&ui::dim("No highlight KPIs yet (optional, up to 3)"));
        return;
    }
    for (i, selection) in kpis.iter().enumerate() {
        match selection.kind() {
            Some(kind) => println!(
                "  {} {} = {}",
                ui::accent(format!("{}.", i + 1)),
                kind.name(),
                ui::kpi_value(selection.computed())
            ),
            None => println!(
                "  {} {}",
                ui::accent(format!("{}.", i + 1)),
                ui::dim("(no KPI type selected)")
            ),
        }
    }
}

pub fn print_metrics_summary(summary: &MetricsSummary) {
    print_bullet(&format!(
        "{} · platforms: {}",
        crate::utils::text::plural(summary.campaigns, "campaign"),
        if summary.platforms.is_empty() {
            "-".to_string()
        } else {
            summary.platforms.join(", ")
        }
    ));
    print_bullet(&format!(
        "budget {} · impressions {} · clicks {} · conversions {}",
        ui::value(summary.total_budget),
        ui::value(summary.total_impressions),
        ui::value(summary.total_clicks),
        ui::value(summary.total_conversions)
    ));
    print_bullet(&format!(
        "blended CTR {} · conversion rate {} · ROAS {}",
        ui::kpi_value(&summary.blended_ctr),
        ui::kpi_value(&summary.blended_conversion_rate),
        ui::kpi_value(&summary.blended_roas)
    ));
}

pub fn print_review(state: &WizardState) {
    println!("  {}", ui::header("Ready to generate"));
    println!();
    for (label, value) in review_rows(state) {
        println!("    {:<14} {}", ui::label(label), ui::or_placeholder(&value));
    }

    let records = metrics::parse(&state.campaign().raw_metrics);
    if !records.is_empty() {
        println!();
        print_metrics_summary(&metrics::summarize(&records));
    }

    let highlights = state.kpis().highlights();
    if !highlights.is_empty() {
        println!();
        println!("  {}", ui::header("Highlight KPIs"));
        for kpi in highlights {
            print_bullet(&format!("{} = {}", kpi.name, ui::kpi_value(&kpi.value)));
        }
    }
    println!();
}

pub fn print_success(receipt: &SubmitReceipt) {
    println!();
    println!("  {}", ui::dim("━".repeat(RULE_WIDTH)));
    println!("  {} {}", ui::success("✓"), ui::success("Report submitted"));
    println!("  {}", ui::dim("━".repeat(RULE_WIDTH)));
    println!();
    print_bullet(&format!(
        "Your video will be generated and sent to {}",
        ui::value(&receipt.email)
    ));
    print_bullet(&ui::dim(format!("submitted at {}", receipt.submitted_at)));
    println!();
}

pub fn print_submit_error(err: &SubmitError) {
    println!();
    println!(
        "  {} {}",
        ui::error("✗"),
        ui::error("Failed to generate the video report. Please try again.")
    );
    println!("    {}", ui::dim(err));
    println!();
}
