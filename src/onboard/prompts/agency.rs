use anyhow::Result;

use crate::wizard::{AgencyPatch, LogoRef, WizardState};

use super::super::view::print_bullet;
use super::text_input;

pub fn prompt_agency(state: &WizardState) -> Result<AgencyPatch> {
    print_bullet("Where should we send the finished video, and whose brand is on it?");
    println!();

    let agency = state.agency();
    let email = text_input("Your email", &agency.email)?;
    let name = text_input("Agency name", &agency.name)?;
    let logo = text_input("Agency logo (image URL or file path)", agency.logo.as_str())?;

    Ok(AgencyPatch {
        email: Some(email.trim().to_string()),
        name: Some(name),
        logo: Some(LogoRef::from_user_input(&logo)),
    })
}
