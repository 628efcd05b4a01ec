use anyhow::Result;

use crate::wizard::{ClientPatch, LogoRef, WizardState};

use super::super::view::print_bullet;
use super::text_input;

pub fn prompt_client(state: &WizardState) -> Result<ClientPatch> {
    print_bullet("Who is this report for?");
    println!();

    let client = state.client();
    let name = text_input("Client name", &client.name)?;
    let logo = text_input("Client logo (image URL or file path)", client.logo.as_str())?;
    let reporting_period = text_input("Reporting period (e.g. March 2024)", &client.reporting_period)?;
    let account_manager = text_input("Account manager", &client.account_manager)?;

    Ok(ClientPatch {
        name: Some(name),
        logo: Some(LogoRef::from_user_input(&logo)),
        reporting_period: Some(reporting_period),
        account_manager: Some(account_manager),
    })
}
