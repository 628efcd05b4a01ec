use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tokio::io::AsyncReadExt;
use tracing::info;

use reportreel::config::Config;
use reportreel::kpi::{self, KpiKind};
use reportreel::metrics::{self, CampaignRecord};
use reportreel::onboard::{self, domain::parse_kpi_fields, view};
use reportreel::submit::{HttpTransport, assemble};
use reportreel::ui::style as ui;
use reportreel::wizard::{WizardController, WizardState, validate_all};

use crate::app::status::render_config;
use crate::cli::commands::{Cli, Commands};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Wizard => run_wizard(&config).await,
        Commands::Kpi { kind, fields } => run_kpi(&kind, &fields),
        Commands::Parse { file, json } => run_parse(file.as_deref(), json).await,
        Commands::Submit { file, dry_run } => run_submit(&config, &file, dry_run).await,
        Commands::Config => {
            println!("{}", render_config(&config));
            Ok(())
        }
    }
}

async fn run_wizard(config: &Config) -> Result<()> {
    match onboard::run_wizard(config).await? {
        Some(receipt) => info!(email = %receipt.email, "wizard finished"),
        None => println!("  {}", ui::dim("Nothing was sent.")),
    }
    Ok(())
}

fn run_kpi(kind: &str, args: &[String]) -> Result<()> {
    let kind: KpiKind = kind.parse()?;
    let fields = parse_kpi_fields(kind, args)?;
    let value = kpi::compute(kind, &fields);
    println!("{} = {}", kind.name(), ui::kpi_value(&value));
    println!("{}", ui::dim(kind.formula()));
    Ok(())
}

async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

async fn run_parse(file: Option<&Path>, json: bool) -> Result<()> {
    let raw = read_input(file).await?;
    let records = metrics::parse(&raw);
    let summary = metrics::summarize(&records);

    if json {
        let out = serde_json::json!({ "records": records, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_records(&records);
    println!();
    view::print_metrics_summary(&summary);
    Ok(())
}

fn print_records(records: &[CampaignRecord]) {
    println!(
        "  {}",
        ui::header(format!(
            "{:<24} {:<14} {:>10} {:>12} {:>8} {:>8} {:>6}",
            "Campaign", "Platform", "Budget", "Impressions", "Clicks", "Conv.", "ROAS"
        ))
    );
    for r in records {
        println!(
            "  {:<24} {:<14} {:>10} {:>12} {:>8} {:>8} {:>6}",
            r.name, r.platform, r.budget, r.impressions, r.clicks, r.conversions, r.roas
        );
    }
}

async fn run_submit(config: &Config, file: &Path, dry_run: bool) -> Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read draft {}", file.display()))?;
    let state: WizardState = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse draft {}", file.display()))?;

    let errors = validate_all(&state);
    if !errors.is_empty() {
        view::print_field_errors(&errors);
        bail!("draft has {} invalid field(s)", errors.len());
    }

    if dry_run {
        let payload = assemble(&state, &config.webhook.source_tag, Utc::now());
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let transport = HttpTransport::new(&config.webhook.url, config.webhook.timeout_secs);
    let mut wizard = WizardController::with_state(transport, state)
        .source_tag(&config.webhook.source_tag);
    if let Err(errors) = wizard.fast_forward() {
        view::print_field_errors(&errors);
        bail!("draft has {} invalid field(s)", errors.len());
    }

    let receipt = wizard.submit().await.context("Report submission failed")?;
    view::print_success(&receipt);
    Ok(())
}
