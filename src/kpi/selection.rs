use serde::{Deserialize, Serialize};

use super::{KpiKind, KpiMetric};
use crate::error::KpiError;

/// Upper bound on highlight KPIs per report.
pub const MAX_KPIS: usize = 3;

/// One highlight KPI slot on the data step.
///
/// `computed` is derived. Every mutation goes through a method that
/// recomputes it, so a reader never observes a stale value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectionDraft")]
pub struct KpiSelection {
    metric: Option<KpiMetric>,
    computed: String,
}

#[derive(Deserialize)]
struct SelectionDraft {
    #[serde(default)]
    metric: Option<KpiMetric>,
}

impl From<SelectionDraft> for KpiSelection {
    fn from(draft: SelectionDraft) -> Self {
        let mut selection = Self {
            metric: draft.metric,
            computed: String::new(),
        };
        selection.recompute();
        selection
    }
}

/// Name/value pair sent downstream for each selected KPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightKpi {
    pub name: String,
    pub value: String,
}

impl KpiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_kind(kind: KpiKind) -> Self {
        Self::from(KpiMetric::empty(kind))
    }

    pub fn kind(&self) -> Option<KpiKind> {
        self.metric.as_ref().map(KpiMetric::kind)
    }

    pub fn metric(&self) -> Option<&KpiMetric> {
        self.metric.as_ref()
    }

    pub fn computed(&self) -> &str {
        &self.computed
    }

    /// Switches the KPI type. Picking a different type clears the inputs;
    /// re-picking the current type keeps them.
    pub fn set_kind(&mut self, kind: KpiKind) {
        if self.kind() == Some(kind) {
            return;
        }
        self.metric = Some(KpiMetric::empty(kind));
        self.recompute();
    }

    pub fn clear_kind(&mut self) {
        self.metric = None;
        self.recompute();
    }

    pub fn set_input(&mut self, key: &str, value: impl Into<String>) -> Result<(), KpiError> {
        let metric = self.metric.as_mut().ok_or(KpiError::KindNotSelected)?;
        if !metric.set(key, value) {
            return Err(KpiError::UnknownField {
                kind: metric.kind(),
                field: key.to_string(),
            });
        }
        self.recompute();
        Ok(())
    }

    pub fn input(&self, key: &str) -> Option<&str> {
        self.metric.as_ref().and_then(|m| m.get(key))
    }

    /// The downstream name/value pair, or `None` while no type is picked.
    pub fn highlight(&self) -> Option<HighlightKpi> {
        self.kind().map(|kind| HighlightKpi {
            name: kind.name().to_string(),
            value: self.computed.clone(),
        })
    }

    fn recompute(&mut self) {
        self.computed = self
            .metric
            .as_ref()
            .map(KpiMetric::compute)
            .unwrap_or_default();
    }
}

impl From<KpiMetric> for KpiSelection {
    fn from(metric: KpiMetric) -> Self {
        Self::from(SelectionDraft {
            metric: Some(metric),
        })
    }
}

/// Ordered KPI slots, never more than [`MAX_KPIS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<KpiSelection>", into = "Vec<KpiSelection>")]
pub struct KpiList(Vec<KpiSelection>);

impl From<Vec<KpiSelection>> for KpiList {
    fn from(entries: Vec<KpiSelection>) -> Self {
        let mut list = Self::default();
        list.replace(entries);
        list
    }
}

impl From<KpiList> for Vec<KpiSelection> {
    fn from(list: KpiList) -> Self {
        list.0
    }
}

impl KpiList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_KPIS
    }

    /// Appends a slot and returns its index, or refuses when full.
    pub fn push(&mut self, selection: KpiSelection) -> Result<usize, KpiError> {
        if self.is_full() {
            tracing::debug!(max = MAX_KPIS, "kpi add refused: list full");
            return Err(KpiError::LimitReached { max: MAX_KPIS });
        }
        self.0.push(selection);
        Ok(self.0.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<KpiSelection, KpiError> {
        if index >= self.0.len() {
            return Err(KpiError::NoSuchEntry(index));
        }
        Ok(self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&KpiSelection> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut KpiSelection> {
        self.0.get_mut(index)
    }

    /// Replaces every slot at once. Entries past [`MAX_KPIS`] are dropped;
    /// returns `true` when that happened.
    pub fn replace(&mut self, mut entries: Vec<KpiSelection>) -> bool {
        let truncated = entries.len() > MAX_KPIS;
        if truncated {
            tracing::warn!(
                requested = entries.len(),
                max = MAX_KPIS,
                "kpi list truncated"
            );
            entries.truncate(MAX_KPIS);
        }
        self.0 = entries;
        truncated
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KpiSelection> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[KpiSelection] {
        &self.0
    }

    /// Name/value pairs for every slot that has a type picked, in order.
    pub fn highlights(&self) -> Vec<HighlightKpi> {
        self.0.iter().filter_map(KpiSelection::highlight).collect()
    }
}

impl<'a> IntoIterator for &'a KpiList {
    type Item = &'a KpiSelection;
    type IntoIter = std::slice::Iter<'a, KpiSelection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
