use serde::Serialize;

use super::CampaignRecord;
use crate::kpi::{ConversionRateInputs, CtrInputs, KpiMetric, RoasInputs};

/// Roll-up of a pasted table shown on the review screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub campaigns: usize,
    pub platforms: Vec<String>,
    pub total_budget: f64,
    pub total_impressions: f64,
    pub total_clicks: f64,
    pub total_conversions: f64,
    pub total_revenue: f64,
    pub blended_ctr: String,
    pub blended_conversion_rate: String,
    pub blended_roas: String,
}

pub fn summarize(records: &[CampaignRecord]) -> MetricsSummary {
    let mut summary = MetricsSummary {
        campaigns: records.len(),
        ..MetricsSummary::default()
    };

    for record in records {
        if !record.platform.is_empty() && !summary.platforms.contains(&record.platform) {
            summary.platforms.push(record.platform.clone());
        }
        summary.total_budget += record.budget;
        summary.total_impressions += record.impressions;
        summary.total_clicks += record.clicks;
        summary.total_conversions += record.conversions;
        summary.total_revenue += record.revenue;
    }

    summary.blended_ctr = KpiMetric::Ctr(CtrInputs {
        clicks: summary.total_clicks.to_string(),
        impressions: summary.total_impressions.to_string(),
    })
    .compute();
    summary.blended_conversion_rate = KpiMetric::ConversionRate(ConversionRateInputs {
        conversions: summary.total_conversions.to_string(),
        clicks: summary.total_clicks.to_string(),
    })
    .compute();
    summary.blended_roas = KpiMetric::Roas(RoasInputs {
        revenue: summary.total_revenue.to_string(),
        investment: summary.total_budget.to_string(),
    })
    .compute();

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::parse;

    #[test]
    fn totals_and_blended_rates() {
        let records = parse(
            "A,Meta,5000,150000,7500,300,4.5,0,0,0,23000\n\
             B,Google,5000,50000,2500,100,1.0,0,0,0,0\n\
             C,Meta,0,0,0,0,0",
        );
        let summary = summarize(&records);
        assert_eq!(summary.campaigns, 3);
        assert_eq!(summary.platforms, vec!["Meta", "Google"]);
        assert_eq!(summary.total_budget, 10_000.0);
        assert_eq!(summary.blended_ctr, "5.0%");
        assert_eq!(summary.blended_conversion_rate, "4.0%");
        assert_eq!(summary.blended_roas, "2.3x");
    }

    #[test]
    fn empty_table_uses_zero_fallbacks() {
        let summary = summarize(&[]);
        assert_eq!(summary.campaigns, 0);
        assert_eq!(summary.blended_ctr, "0%");
        assert_eq!(summary.blended_roas, "0x");
    }
}
