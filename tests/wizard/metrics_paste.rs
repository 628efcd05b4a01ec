use reportreel::metrics::{self, Delimiter};

#[test]
fn spreadsheet_paste_with_tabs() {
    let raw = "Summer Sale\tMeta Ads\t5000\t150000\t7500\t300\t4.5\t120\t8000\t950\t22500\r\n\
               Brand Awareness\tGoogle Ads\t3000\t90000\t2700\t81\t3.2\r\n";
    let records = metrics::parse(raw);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].revenue, 22_500.0);
    assert_eq!(records[0].interactions, 950.0);
    assert_eq!(records[1].name, "Brand Awareness");
    assert_eq!(records[1].revenue, 0.0);

    let summary = metrics::summarize(&records);
    assert_eq!(summary.total_clicks, 10_200.0);
    assert_eq!(summary.platforms, vec!["Meta Ads", "Google Ads"]);
}

#[test]
fn count_matches_parse_for_messy_input() {
    let raw = "\n\nA | X | 1\n   \nB,Y,2\n\t\nC\tZ\t3\n\n";
    assert_eq!(metrics::count_campaign_lines(raw), metrics::parse(raw).len());
    assert_eq!(metrics::count_campaign_lines(raw), 3);
}

#[test]
fn detection_order_is_tab_comma_pipe() {
    assert_eq!(Delimiter::detect("a\tb,c | d"), Some(Delimiter::Tab));
    assert_eq!(Delimiter::detect("a,b | c"), Some(Delimiter::Comma));
    assert_eq!(Delimiter::detect("a | b"), Some(Delimiter::Pipe));
    assert_eq!(Delimiter::detect("a|b"), None);
}
