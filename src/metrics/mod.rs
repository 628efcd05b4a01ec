//! Pasted campaign table parsing.
//!
//! Users paste rows straight out of a spreadsheet, so the delimiter is
//! detected per line: tab first, then comma, then the ` | ` separator used in
//! the on-screen example. Parsing never fails. Short rows get default
//! trailing columns and unreadable numbers become zero, because the webhook
//! re-parses `metricsRaw` itself and is the authority on the numbers.

mod summary;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::kpi::parse_number;

pub use summary::{MetricsSummary, summarize};

/// Column order expected in pasted data. The last four are optional.
pub const COLUMNS: [&str; 11] = [
    "Campaign Name",
    "Platform",
    "Budget",
    "Impressions",
    "Clicks",
    "Conversions",
    "ROAS",
    "Leads",
    "Followers",
    "Interactions",
    "Revenue",
];

/// Example rows shown next to the paste prompt.
pub const EXAMPLE: &str = "Summer Sale | Meta Ads | 5000 | 150000 | 7500 | 300 | 4.5\n\
                           Brand Awareness | Google Ads | 3000 | 90000 | 2700 | 81 | 3.2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Pipe,
}

impl Delimiter {
    /// Detection order when a line contains more than one candidate.
    pub const PRIORITY: [Self; 3] = [Self::Tab, Self::Comma, Self::Pipe];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tab => "\t",
            Self::Comma => ",",
            Self::Pipe => " | ",
        }
    }

    /// The first delimiter, in priority order, that occurs in `line`.
    pub fn detect(line: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|d| line.contains(d.as_str()))
    }
}

/// One pasted row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    pub name: String,
    pub platform: String,
    pub budget: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub roas: f64,
    pub leads: f64,
    pub followers: f64,
    pub interactions: f64,
    pub revenue: f64,
}

impl CampaignRecord {
    /// Builds a record from one line. Never fails.
    pub fn from_line(line: &str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let cells: Vec<&str> = match Delimiter::detect(line) {
            Some(delimiter) => line.split(delimiter.as_str()).map(str::trim).collect(),
            None => vec![line.trim()],
        };
        let text = |idx: usize| cells.get(idx).map_or_else(String::new, |c| (*c).to_string());
        let number = |idx: usize| cells.get(idx).map_or(0.0, |c| parse_number(c));

        Self {
            name: text(0),
            platform: text(1),
            budget: number(2),
            impressions: number(3),
            clicks: number(4),
            conversions: number(5),
            roas: number(6),
            leads: number(7),
            followers: number(8),
            interactions: number(9),
            revenue: number(10),
        }
    }

    /// All eleven columns joined by `delimiter`.
    pub fn to_line(&self, delimiter: Delimiter) -> String {
        let numbers = [
            self.budget,
            self.impressions,
            self.clicks,
            self.conversions,
            self.roas,
            self.leads,
            self.followers,
            self.interactions,
            self.revenue,
        ];
        let sep = delimiter.as_str();
        let mut line = format!("{}{sep}{}", self.name, self.platform);
        for value in numbers {
            let _ = write!(line, "{sep}{value}");
        }
        line
    }
}

/// Parses pasted rows in input order, skipping blank lines.
pub fn parse(raw: &str) -> Vec<CampaignRecord> {
    let records: Vec<CampaignRecord> = raw
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(CampaignRecord::from_line)
        .collect();
    tracing::debug!(rows = records.len(), "parsed campaign metrics");
    records
}

/// Number of rows [`parse`] would return.
pub fn count_campaign_lines(raw: &str) -> usize {
    raw.split('\n').filter(|line| !line.trim().is_empty()).count()
}

/// Renders records back to text, one per line.
pub fn serialize(records: &[CampaignRecord], delimiter: Delimiter) -> String {
    records
        .iter()
        .map(|r| r.to_line(delimiter))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_example_parses_with_defaults() {
        let records = parse("Summer Sale | Meta Ads | 5000 | 150000 | 7500 | 300 | 4.5");
        assert_eq!(
            records,
            vec![CampaignRecord {
                name: "Summer Sale".into(),
                platform: "Meta Ads".into(),
                budget: 5000.0,
                impressions: 150_000.0,
                clicks: 7500.0,
                conversions: 300.0,
                roas: 4.5,
                ..CampaignRecord::default()
            }]
        );
    }

    #[test]
    fn tab_and_comma_lines_mix_in_one_paste() {
        let raw = "A\tMeta\t100\t1000\t10\t1\t2.0\nB,Google,200,2000,20,2,3.0,5,6,7,8\n";
        let records = parse(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[0].platform, "Meta");
        assert_eq!(records[1].platform, "Google");
        assert_eq!(records[1].leads, 5.0);
        assert_eq!(records[1].revenue, 8.0);
    }

    #[test]
    fn tab_wins_over_comma() {
        let record = CampaignRecord::from_line("Sale, Q3\tMeta\t1,000");
        assert_eq!(record.name, "Sale, Q3");
        assert_eq!(record.platform, "Meta");
        assert_eq!(record.budget, 0.0);
    }

    #[test]
    fn blank_lines_are_skipped_and_order_kept() {
        let raw = "\n  \nFirst,X\n\r\nSecond,Y\n";
        let names: Vec<String> = parse(raw).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(count_campaign_lines(raw), 2);
    }

    #[test]
    fn undelimited_line_is_name_only() {
        let record = CampaignRecord::from_line("  Just a name  ");
        assert_eq!(record.name, "Just a name");
        assert_eq!(record.platform, "");
        assert_eq!(record.clicks, 0.0);
    }

    #[test]
    fn malformed_numbers_degrade_to_zero() {
        let record = CampaignRecord::from_line("X,Y,$5000,lots,12");
        assert_eq!(record.budget, 0.0);
        assert_eq!(record.impressions, 0.0);
        assert_eq!(record.clicks, 12.0);
    }

    #[test]
    fn crlf_is_tolerated() {
        let records = parse("A,Meta,1\r\nB,Google,2\r\n");
        assert_eq!(records[0].budget, 1.0);
        assert_eq!(records[1].name, "B");
    }

    #[test]
    fn reserialized_records_parse_back_equal() {
        let raw = "Summer Sale | Meta Ads | 5000 | 150000 | 7500 | 300 | 4.5\n\
                   Brand\tGoogle\t3000.5\t90000\t2700\t81\t3.2\t12\t400\t33\t9600";
        for delimiter in Delimiter::PRIORITY {
            let first = parse(raw);
            let text = serialize(&first, delimiter);
            assert_eq!(parse(&text), first, "{delimiter:?}");
        }
    }

    #[test]
    fn example_text_parses_to_two_rows() {
        assert_eq!(parse(EXAMPLE).len(), 2);
    }
}
