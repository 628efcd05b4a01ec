use std::collections::BTreeMap;

use reportreel::kpi::{self, KpiKind};

fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn documented_examples() {
    assert_eq!(
        kpi::compute(KpiKind::Ctr, &fields(&[("clicks", "7500"), ("impressions", "150000")])),
        "5.0%"
    );
    assert_eq!(
        kpi::compute(KpiKind::Roas, &fields(&[("revenue", "22500"), ("investment", "5000")])),
        "4.5x"
    );
    assert_eq!(
        kpi::compute(KpiKind::Cpl, &fields(&[("investment", "5000"), ("leads", "0")])),
        "0"
    );
}

#[test]
fn every_kind_has_a_zero_fallback() {
    let expected = [
        (KpiKind::Cpl, "0"),
        (KpiKind::Ctr, "0%"),
        (KpiKind::ConversionRate, "0%"),
        (KpiKind::EngagementRate, "0%"),
        (KpiKind::Roas, "0x"),
    ];
    for (kind, fallback) in expected {
        assert_eq!(kpi::compute(kind, &BTreeMap::new()), fallback, "{kind}");
    }
}

#[test]
fn kinds_parse_from_cli_spellings() {
    for (raw, kind) in [
        ("ctr", KpiKind::Ctr),
        ("ROAS", KpiKind::Roas),
        ("conversion-rate", KpiKind::ConversionRate),
        ("Engagement Rate", KpiKind::EngagementRate),
        ("Cost per Lead (CPL)", KpiKind::Cpl),
    ] {
        assert_eq!(raw.parse::<KpiKind>().unwrap(), kind, "{raw}");
    }
    assert!("cpm".parse::<KpiKind>().is_err());
}

#[test]
fn each_kind_takes_two_inputs() {
    for kind in KpiKind::all() {
        assert_eq!(kind.fields().len(), 2, "{kind}");
        assert!(!kind.formula().is_empty());
    }
}
