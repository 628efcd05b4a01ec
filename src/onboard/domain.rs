use std::collections::BTreeMap;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use crate::kpi::KpiKind;
use crate::metrics;
use crate::wizard::WizardState;

/// Splits `clicks=7500` into its key and value.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("expected key=value, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("missing field name in `{raw}`");
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Turns `key=value` arguments into a field map, rejecting keys `kind` does
/// not take so typos surface instead of silently computing a fallback.
pub fn parse_kpi_fields(kind: KpiKind, args: &[String]) -> Result<BTreeMap<String, String>> {
    let mut fields = BTreeMap::new();
    for arg in args {
        let (key, value) = parse_assignment(arg)?;
        if !kind.has_field(&key) {
            let expected = kind
                .fields()
                .iter()
                .map(|f| f.key)
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::bail!("{kind} takes {expected}; `{key}` is not one of them");
        }
        fields.insert(key, value);
    }
    Ok(fields)
}

/// A pasted metrics answer is either the rows themselves or `@path` to a
/// file holding them.
pub fn resolve_metrics_input(raw: &str) -> Result<String> {
    match raw.trim().strip_prefix('@') {
        Some(path) => {
            let expanded = shellexpand::tilde(path.trim()).to_string();
            fs::read_to_string(Path::new(&expanded))
                .with_context(|| format!("Failed to read metrics file {expanded}"))
        }
        None => Ok(raw.to_string()),
    }
}

/// Line that ends a multi-line paste.
pub const PASTE_TERMINATOR: &str = ".";

/// Collects pasted metrics rows up to a lone `.` line or end of input.
/// Blank separator rows stay in the text; `@path` as the first row loads
/// the file instead.
pub fn read_pasted_metrics<R: BufRead>(reader: R) -> Result<String> {
    let mut rows: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read pasted metrics")?;
        if line.trim() == PASTE_TERMINATOR {
            break;
        }
        let first_row = rows.iter().all(|row| row.trim().is_empty());
        if first_row && line.trim_start().starts_with('@') {
            return resolve_metrics_input(&line);
        }
        rows.push(line);
    }
    Ok(rows.join("\n"))
}

/// Label/value rows for the review screen, in display order.
pub fn review_rows(state: &WizardState) -> Vec<(&'static str, String)> {
    let agency = state.agency();
    let client = state.client();
    let campaign = state.campaign();
    let campaigns = metrics::count_campaign_lines(&campaign.raw_metrics);

    vec![
        ("Agency", agency.name.clone()),
        ("Client", client.name.clone()),
        ("Period", client.reporting_period.clone()),
        ("Manager", client.account_manager.clone()),
        (
            "Tone",
            campaign
                .video_tone
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
        ),
        ("Data", crate::utils::text::plural(campaigns, "campaign") + " data provided"),
        ("Monthly goal", campaign.monthly_goal.clone()),
        ("Main result", campaign.main_result.clone()),
        ("Best campaign", campaign.best_campaign.clone()),
        ("Email", agency.email.clone()),
    ]
}
