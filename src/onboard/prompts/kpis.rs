use anyhow::Result;
use dialoguer::Select;

use crate::kpi::{KpiKind, MAX_KPIS};
use crate::ui::style as ui;
use crate::wizard::WizardState;

use super::super::view::{print_bullet, print_kpis};
use super::text_input;

enum KpiAction {
    Add,
    Edit(usize),
    Remove(usize),
    Done,
}

impl KpiAction {
    fn label(&self, state: &WizardState) -> String {
        let name = |i: usize| {
            state
                .kpis()
                .get(i)
                .and_then(|s| s.kind())
                .map_or("unset", KpiKind::name)
        };
        match self {
            Self::Add => "Add a highlight KPI".into(),
            Self::Edit(i) => format!("Edit KPI {} ({})", i + 1, name(*i)),
            Self::Remove(i) => format!("Remove KPI {} ({})", i + 1, name(*i)),
            Self::Done => "Done with KPIs".into(),
        }
    }
}

/// Add/edit/remove loop for the optional highlight KPIs.
pub fn manage_kpis(state: &mut WizardState) -> Result<()> {
    print_bullet(&format!(
        "Pick up to {MAX_KPIS} KPIs to feature in the video. Values are computed as you type."
    ));

    loop {
        println!();
        print_kpis(state.kpis());

        let mut actions = Vec::new();
        if !state.kpis().is_full() {
            actions.push(KpiAction::Add);
        }
        for i in 0..state.kpis().len() {
            actions.push(KpiAction::Edit(i));
        }
        for i in 0..state.kpis().len() {
            actions.push(KpiAction::Remove(i));
        }
        actions.push(KpiAction::Done);

        let labels: Vec<String> = actions.iter().map(|a| a.label(state)).collect();
        let idx = Select::new()
            .with_prompt("  Highlight KPIs")
            .items(&labels)
            .default(labels.len() - 1)
            .interact()?;

        match actions[idx] {
            KpiAction::Add => {
                let index = state.add_kpi(None)?;
                edit_kpi(state, index)?;
            }
            KpiAction::Edit(index) => edit_kpi(state, index)?,
            KpiAction::Remove(index) => {
                state.remove_kpi(index)?;
            }
            KpiAction::Done => return Ok(()),
        }
    }
}

fn edit_kpi(state: &mut WizardState, index: usize) -> Result<()> {
    let kinds = KpiKind::all();
    let items: Vec<String> = kinds
        .iter()
        .map(|k| format!("{:<27} {}", k.name(), ui::dim(k.formula())))
        .collect();

    let selection = state.kpi_mut(index)?;
    let default = selection
        .kind()
        .and_then(|current| kinds.iter().position(|k| *k == current))
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("  KPI type")
        .items(&items)
        .default(default)
        .interact()?;
    let kind = kinds[picked];
    selection.set_kind(kind);

    for field in kind.fields() {
        let current = selection.input(field.key).unwrap_or_default().to_string();
        let value = text_input(field.label, &current)?;
        selection.set_input(field.key, value)?;
    }

    println!(
        "  {} {} = {}",
        ui::success("✓"),
        kind.name(),
        ui::kpi_value(selection.computed())
    );
    Ok(())
}
