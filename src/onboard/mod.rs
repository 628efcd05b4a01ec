//! Interactive terminal front end for the report wizard.

pub mod domain;
pub mod flow;
pub mod prompts;
pub mod view;

pub use flow::{drive, run_wizard};
