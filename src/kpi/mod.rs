//! Highlight KPI catalog and calculator.
//!
//! Every KPI is a ratio of two raw campaign numbers. Raw values arrive as the
//! text the user typed; anything that does not parse as a finite number counts
//! as zero, and a non-positive denominator yields the KPI's zero fallback
//! instead of an error. [`compute`] is total.

mod inputs;
mod selection;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::KpiError;

pub use inputs::{
    ConversionRateInputs, CplInputs, CtrInputs, EngagementRateInputs, KpiMetric, RoasInputs,
};
pub use selection::{HighlightKpi, KpiList, KpiSelection, MAX_KPIS};

/// The fixed set of KPIs a report can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter)]
pub enum KpiKind {
    #[serde(rename = "CPL")]
    Cpl,
    #[serde(rename = "CTR")]
    Ctr,
    ConversionRate,
    EngagementRate,
    #[serde(rename = "ROAS")]
    Roas,
}

/// One raw input a KPI needs, with the label shown next to its prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiField {
    pub key: &'static str,
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> KpiField {
    KpiField { key, label }
}

const CPL_FIELDS: [KpiField; 2] = [
    field("investment", "Total investment"),
    field("leads", "Leads generated"),
];
const CTR_FIELDS: [KpiField; 2] = [
    field("clicks", "Clicks"),
    field("impressions", "Impressions"),
];
const CONVERSION_FIELDS: [KpiField; 2] = [
    field("conversions", "Conversions"),
    field("clicks", "Clicks"),
];
const ENGAGEMENT_FIELDS: [KpiField; 2] = [
    field("interactions", "Interactions"),
    field("followers", "Followers"),
];
const ROAS_FIELDS: [KpiField; 2] = [
    field("revenue", "Revenue"),
    field("investment", "Total investment"),
];

impl KpiKind {
    /// Short code used on the command line and in serialized drafts.
    pub fn code(self) -> &'static str {
        match self {
            Self::Cpl => "CPL",
            Self::Ctr => "CTR",
            Self::ConversionRate => "ConversionRate",
            Self::EngagementRate => "EngagementRate",
            Self::Roas => "ROAS",
        }
    }

    /// Display name sent downstream as the highlight KPI name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cpl => "Cost per Lead (CPL)",
            Self::Ctr => "Click-Through Rate (CTR)",
            Self::ConversionRate => "Conversion Rate",
            Self::EngagementRate => "Engagement Rate",
            Self::Roas => "Return on Ad Spend (ROAS)",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Self::Cpl => "investment ÷ leads",
            Self::Ctr => "clicks ÷ impressions × 100",
            Self::ConversionRate => "conversions ÷ clicks × 100",
            Self::EngagementRate => "interactions ÷ followers × 100",
            Self::Roas => "revenue ÷ investment",
        }
    }

    /// Required inputs in prompt order: numerator first, then denominator.
    pub fn fields(self) -> &'static [KpiField] {
        match self {
            Self::Cpl => &CPL_FIELDS,
            Self::Ctr => &CTR_FIELDS,
            Self::ConversionRate => &CONVERSION_FIELDS,
            Self::EngagementRate => &ENGAGEMENT_FIELDS,
            Self::Roas => &ROAS_FIELDS,
        }
    }

    pub fn has_field(self, key: &str) -> bool {
        self.fields().iter().any(|f| f.key == key)
    }

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl fmt::Display for KpiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn normalize_kind(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for KpiKind {
    type Err = KpiError;

    /// Accepts the code (`ctr`), the variant name (`conversion_rate`,
    /// `ConversionRate`) or the display name, ignoring case and punctuation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_kind(s);
        if wanted.is_empty() {
            return Err(KpiError::UnknownKind(s.to_string()));
        }
        Self::iter()
            .find(|kind| {
                normalize_kind(kind.code()) == wanted || normalize_kind(kind.name()) == wanted
            })
            .ok_or_else(|| KpiError::UnknownKind(s.to_string()))
    }
}

/// Computes `kind` from a loose field map. Missing keys read as empty, which
/// in turn read as zero.
pub fn compute(kind: KpiKind, inputs: &BTreeMap<String, String>) -> String {
    KpiMetric::from_fields(kind, inputs).compute()
}

/// Parses one raw numeric input. Empty, non-numeric and non-finite text is 0.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn ratio(numerator: &str, denominator: &str) -> Option<f64> {
    let den = parse_number(denominator);
    if den <= 0.0 {
        return None;
    }
    Some(parse_number(numerator) / den)
}

pub(crate) fn format_amount(numerator: &str, denominator: &str) -> String {
    ratio(numerator, denominator).map_or_else(|| "0".to_string(), |v| format!("{v:.2}"))
}

pub(crate) fn format_percent(numerator: &str, denominator: &str) -> String {
    ratio(numerator, denominator).map_or_else(|| "0%".to_string(), |v| format!("{:.1}%", v * 100.0))
}

pub(crate) fn format_multiplier(numerator: &str, denominator: &str) -> String {
    ratio(numerator, denominator).map_or_else(|| "0x".to_string(), |v| format!("{v:.1}x"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn ctr_example() {
        let inputs = map(&[("clicks", "7500"), ("impressions", "150000")]);
        assert_eq!(compute(KpiKind::Ctr, &inputs), "5.0%");
    }

    #[test]
    fn roas_example() {
        let inputs = map(&[("revenue", "22500"), ("investment", "5000")]);
        assert_eq!(compute(KpiKind::Roas, &inputs), "4.5x");
    }

    #[test]
    fn cpl_zero_leads_falls_back() {
        let inputs = map(&[("investment", "5000"), ("leads", "0")]);
        assert_eq!(compute(KpiKind::Cpl, &inputs), "0");
    }

    #[test]
    fn cpl_formats_two_decimals() {
        let inputs = map(&[("investment", "5000"), ("leads", "300")]);
        assert_eq!(compute(KpiKind::Cpl, &inputs), "16.67");
    }

    #[test]
    fn conversion_and_engagement_rates() {
        let conv = map(&[("conversions", "300"), ("clicks", "7500")]);
        assert_eq!(compute(KpiKind::ConversionRate, &conv), "4.0%");
        let eng = map(&[("interactions", "1000"), ("followers", "30000")]);
        assert_eq!(compute(KpiKind::EngagementRate, &eng), "3.3%");
    }

    #[test]
    fn every_kind_falls_back_on_missing_inputs() {
        let empty = BTreeMap::new();
        assert_eq!(compute(KpiKind::Cpl, &empty), "0");
        assert_eq!(compute(KpiKind::Ctr, &empty), "0%");
        assert_eq!(compute(KpiKind::ConversionRate, &empty), "0%");
        assert_eq!(compute(KpiKind::EngagementRate, &empty), "0%");
        assert_eq!(compute(KpiKind::Roas, &empty), "0x");
    }

    #[test]
    fn negative_denominator_falls_back() {
        let inputs = map(&[("clicks", "10"), ("impressions", "-100")]);
        assert_eq!(compute(KpiKind::Ctr, &inputs), "0%");
    }

    #[test]
    fn garbage_input_reads_as_zero() {
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("  42.5 "), 42.5);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        let inputs = map(&[("revenue", "lots"), ("investment", "100")]);
        assert_eq!(compute(KpiKind::Roas, &inputs), "0.0x");
    }

    #[test]
    fn kind_parses_from_code_and_name() {
        assert_eq!("ctr".parse::<KpiKind>().unwrap(), KpiKind::Ctr);
        assert_eq!("ROAS".parse::<KpiKind>().unwrap(), KpiKind::Roas);
        assert_eq!(
            "conversion_rate".parse::<KpiKind>().unwrap(),
            KpiKind::ConversionRate
        );
        assert_eq!(
            "Engagement Rate".parse::<KpiKind>().unwrap(),
            KpiKind::EngagementRate
        );
        assert!("ltv".parse::<KpiKind>().is_err());
        assert!("".parse::<KpiKind>().is_err());
    }

    #[test]
    fn catalog_lists_two_fields_per_kind() {
        for kind in KpiKind::all() {
            assert_eq!(kind.fields().len(), 2, "{kind}");
        }
        assert!(KpiKind::Roas.has_field("revenue"));
        assert!(!KpiKind::Roas.has_field("clicks"));
    }
}
