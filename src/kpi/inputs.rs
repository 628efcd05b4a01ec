use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{KpiKind, format_amount, format_multiplier, format_percent};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CplInputs {
    pub investment: String,
    pub leads: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtrInputs {
    pub clicks: String,
    pub impressions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionRateInputs {
    pub conversions: String,
    pub clicks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementRateInputs {
    pub interactions: String,
    pub followers: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoasInputs {
    pub revenue: String,
    pub investment: String,
}

/// A KPI type together with the raw text of exactly the inputs it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kpiType", content = "inputs")]
pub enum KpiMetric {
    #[serde(rename = "CPL")]
    Cpl(CplInputs),
    #[serde(rename = "CTR")]
    Ctr(CtrInputs),
    ConversionRate(ConversionRateInputs),
    EngagementRate(EngagementRateInputs),
    #[serde(rename = "ROAS")]
    Roas(RoasInputs),
}

impl KpiMetric {
    /// A metric of `kind` with every input blank.
    pub fn empty(kind: KpiKind) -> Self {
        match kind {
            KpiKind::Cpl => Self::Cpl(CplInputs::default()),
            KpiKind::Ctr => Self::Ctr(CtrInputs::default()),
            KpiKind::ConversionRate => Self::ConversionRate(ConversionRateInputs::default()),
            KpiKind::EngagementRate => Self::EngagementRate(EngagementRateInputs::default()),
            KpiKind::Roas => Self::Roas(RoasInputs::default()),
        }
    }

    /// Builds a metric from a loose field map; unknown keys are ignored.
    pub fn from_fields(kind: KpiKind, fields: &BTreeMap<String, String>) -> Self {
        let mut metric = Self::empty(kind);
        for (key, value) in fields {
            metric.set(key, value.clone());
        }
        metric
    }

    pub fn kind(&self) -> KpiKind {
        match self {
            Self::Cpl(_) => KpiKind::Cpl,
            Self::Ctr(_) => KpiKind::Ctr,
            Self::ConversionRate(_) => KpiKind::ConversionRate,
            Self::EngagementRate(_) => KpiKind::EngagementRate,
            Self::Roas(_) => KpiKind::Roas,
        }
    }

    pub fn compute(&self) -> String {
        match self {
            Self::Cpl(i) => format_amount(&i.investment, &i.leads),
            Self::Ctr(i) => format_percent(&i.clicks, &i.impressions),
            Self::ConversionRate(i) => format_percent(&i.conversions, &i.clicks),
            Self::EngagementRate(i) => format_percent(&i.interactions, &i.followers),
            Self::Roas(i) => format_multiplier(&i.revenue, &i.investment),
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        match (self, key) {
            (Self::Cpl(i), "investment") => Some(&mut i.investment),
            (Self::Cpl(i), "leads") => Some(&mut i.leads),
            (Self::Ctr(i), "clicks") => Some(&mut i.clicks),
            (Self::Ctr(i), "impressions") => Some(&mut i.impressions),
            (Self::ConversionRate(i), "conversions") => Some(&mut i.conversions),
            (Self::ConversionRate(i), "clicks") => Some(&mut i.clicks),
            (Self::EngagementRate(i), "interactions") => Some(&mut i.interactions),
            (Self::EngagementRate(i), "followers") => Some(&mut i.followers),
            (Self::Roas(i), "revenue") => Some(&mut i.revenue),
            (Self::Roas(i), "investment") => Some(&mut i.investment),
            _ => None,
        }
    }

    /// Stores `value` under `key`. Returns `false` when this KPI has no such
    /// input, leaving the metric untouched.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match (self, key) {
            (Self::Cpl(i), "investment") => &i.investment,
            (Self::Cpl(i), "leads") => &i.leads,
            (Self::Ctr(i), "clicks") => &i.clicks,
            (Self::Ctr(i), "impressions") => &i.impressions,
            (Self::ConversionRate(i), "conversions") => &i.conversions,
            (Self::ConversionRate(i), "clicks") => &i.clicks,
            (Self::EngagementRate(i), "interactions") => &i.interactions,
            (Self::EngagementRate(i), "followers") => &i.followers,
            (Self::Roas(i), "revenue") => &i.revenue,
            (Self::Roas(i), "investment") => &i.investment,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// `(key, raw value)` pairs in the catalog's prompt order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        self.kind()
            .fields()
            .iter()
            .map(|f| (f.key, self.get(f.key).unwrap_or_default()))
            .collect()
    }
}
