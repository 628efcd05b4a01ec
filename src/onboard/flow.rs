use anyhow::Result;
use dialoguer::{Confirm, Select};

use crate::config::Config;
use crate::submit::{HttpTransport, WebhookTransport};
use crate::ui::style as ui;
use crate::wizard::{StatePatch, Step, SubmitReceipt, WizardController};

use super::prompts::{manage_kpis, prompt_agency, prompt_campaign, prompt_client};
use super::view::{
    print_field_errors, print_review, print_step, print_submit_error, print_success,
    print_welcome_banner,
};

enum Nav {
    Next,
    Back,
    Quit,
}

/// Runs the interactive four-step report wizard against the configured
/// webhook. Returns `None` when the user quits before a successful submit.
pub async fn run_wizard(config: &Config) -> Result<Option<SubmitReceipt>> {
    let transport = HttpTransport::new(&config.webhook.url, config.webhook.timeout_secs);
    let wizard = WizardController::new(transport)
        .source_tag(&config.webhook.source_tag)
        .lock_back_while_submitting(config.wizard.lock_back_while_submitting);
    drive(wizard).await
}

/// Prompt loop over any transport.
pub async fn drive<T: WebhookTransport>(
    mut wizard: WizardController<T>,
) -> Result<Option<SubmitReceipt>> {
    print_welcome_banner();

    loop {
        let step = wizard.step();
        print_step(wizard.progress(), step);

        if step.is_terminal() {
            print_review(wizard.state());
            match review_action()? {
                Nav::Next => {
                    if let Some(receipt) = generate(&mut wizard).await? {
                        return Ok(Some(receipt));
                    }
                }
                Nav::Back => {
                    wizard.back();
                }
                Nav::Quit => return Ok(None),
            }
            continue;
        }

        collect_step(&mut wizard, step)?;

        match step_action(step)? {
            Nav::Next => {
                if let Err(errors) = wizard.next() {
                    print_field_errors(&errors);
                }
            }
            Nav::Back => {
                wizard.back();
            }
            Nav::Quit => return Ok(None),
        }
    }
}

fn collect_step<T: WebhookTransport>(wizard: &mut WizardController<T>, step: Step) -> Result<()> {
    match step {
        Step::Basics => {
            let patch = prompt_agency(wizard.state())?;
            wizard.update(StatePatch::Agency(patch));
        }
        Step::Client => {
            let patch = prompt_client(wizard.state())?;
            wizard.update(StatePatch::Client(patch));
        }
        Step::Data => {
            let patch = prompt_campaign(wizard.state())?;
            wizard.update(StatePatch::Campaign(patch));
            manage_kpis(wizard.state_mut())?;
        }
        Step::Generate => {}
    }
    Ok(())
}

fn step_action(step: Step) -> Result<Nav> {
    let mut options = vec![(Nav::Next, "Next")];
    if step.prev().is_some() {
        options.push((Nav::Back, "Back"));
    }
    options.push((Nav::Quit, "Quit"));
    pick(options)
}

fn review_action() -> Result<Nav> {
    pick(vec![
        (Nav::Next, "Generate video report"),
        (Nav::Back, "Back"),
        (Nav::Quit, "Quit"),
    ])
}

fn pick(options: Vec<(Nav, &str)>) -> Result<Nav> {
    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let idx = Select::new()
        .with_prompt("  Continue")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options
        .into_iter()
        .nth(idx)
        .map_or(Nav::Quit, |(nav, _)| nav))
}

/// Submits, offering a retry on failure. `None` means the user went back
/// or gave up; the wizard is left on the review step or the one before it.
async fn generate<T: WebhookTransport>(
    wizard: &mut WizardController<T>,
) -> Result<Option<SubmitReceipt>> {
    loop {
        println!("  {}", ui::dim("Generating video report..."));
        match wizard.submit().await {
            Ok(receipt) => {
                print_success(&receipt);
                return Ok(Some(receipt));
            }
            Err(err) => {
                print_submit_error(&err);
                let retry = Confirm::new()
                    .with_prompt("  Try again now?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(None);
                }
            }
        }
    }
}
