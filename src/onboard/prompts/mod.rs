mod agency;
mod campaign;
mod client;
mod kpis;

use anyhow::Result;
use dialoguer::Input;

pub use agency::prompt_agency;
pub use campaign::prompt_campaign;
pub use client::prompt_client;
pub use kpis::manage_kpis;

/// Free-text prompt prefilled with the current answer. Empty answers are
/// accepted here; the step validator reports them.
fn text_input(prompt: &str, current: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("  {prompt}"))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
