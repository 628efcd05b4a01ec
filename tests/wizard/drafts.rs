use chrono::{TimeZone, Utc};
use reportreel::submit::assemble;
use reportreel::wizard::{Field, WizardState, validate_all};

const COMPLETE_DRAFT: &str = r#"{
    "agency": {
        "email": "ana@pixel.agency",
        "name": "Pixel Agency",
        "logo": "https://cdn.example.com/pixel.png"
    },
    "client": {
        "name": "Acme Shoes",
        "logo": "https://cdn.example.com/acme.png",
        "reportingPeriod": "Q1 2024",
        "accountManager": "Sam Rivera"
    },
    "campaign": {
        "monthlyGoal": "250 leads",
        "mainResult": "310 leads",
        "rawMetrics": "Spring,Meta,1000,20000,400,20,2.1",
        "bestCampaign": "Spring",
        "whatDidntWork": "Nothing major",
        "upcomingCampaigns": "Summer launch",
        "videoTone": "Professional"
    },
    "kpis": [
        {"metric": {"kpiType": "CPL", "inputs": {"investment": "1000", "leads": "20"}}},
        {}
    ]
}"#;

fn load(json: &str) -> WizardState {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("draft.json");
    std::fs::write(&file, json).unwrap();
    let raw = std::fs::read_to_string(&file).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn complete_draft_validates_and_assembles() {
    let state = load(COMPLETE_DRAFT);
    assert!(validate_all(&state).is_empty());

    let now = Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 15).unwrap();
    let payload = assemble(&state, "video_report_generator", now);
    assert_eq!(payload.timestamp, "2024-04-02T09:30:15.000Z");
    assert_eq!(payload.report_period, "Q1 2024");
    assert_eq!(payload.video_tone, "Professional");
    assert_eq!(payload.upcoming_campaigns, "Summer launch");
    assert_eq!(payload.best_campaign_reason, "");
    assert_eq!(payload.highlight_kpis.len(), 1);
    assert_eq!(payload.highlight_kpis[0].name, "Cost per Lead (CPL)");
    assert_eq!(payload.highlight_kpis[0].value, "50.00");
}

#[test]
fn partial_draft_reports_every_missing_field() {
    let state = load(r#"{"agency": {"email": "ana@pixel"}, "campaign": {"videoTone": "Friendly"}}"#);
    let errors = validate_all(&state);

    assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
    assert_eq!(errors.get(Field::ClientLogo), Some("Client logo is required"));
    assert_eq!(errors.get(Field::RawMetrics), Some("Campaign data is required"));
    assert!(!errors.contains(Field::VideoTone));
}

#[test]
fn oversized_kpi_list_in_draft_is_capped() {
    let json = r#"{"kpis": [{}, {}, {}, {}, {}]}"#;
    let state = load(json);
    assert_eq!(state.kpis().len(), 3);
}

#[test]
fn unknown_tone_is_rejected_at_load() {
    let result: Result<WizardState, _> =
        serde_json::from_str(r#"{"campaign": {"videoTone": "Sarcastic"}}"#);
    assert!(result.is_err());
}
