use std::time::Duration;

use reportreel::kpi::KpiKind;
use reportreel::submit::{self, HttpTransport};
use reportreel::wizard::{
    AgencyPatch, CampaignPatch, ClientPatch, LogoRef, StatePatch, Step, SubmissionStatus,
    VideoTone, WizardController, WizardState,
};
use reportreel::SubmitError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOOK_PATH: &str = "/hooks/catch/42/report/";

fn complete_state() -> WizardState {
    let mut state = WizardState::new();
    state.update(StatePatch::Agency(AgencyPatch {
        email: Some("ana@pixel.agency".into()),
        name: Some("Pixel Agency".into()),
        logo: Some(LogoRef::new("https://cdn.example.com/pixel.png")),
    }));
    state.update(StatePatch::Client(ClientPatch {
        name: Some("Acme Shoes".into()),
        logo: Some(LogoRef::new("https://cdn.example.com/acme.png")),
        reporting_period: Some("March 2024".into()),
        account_manager: Some("Sam Rivera".into()),
    }));
    state.update(StatePatch::Campaign(CampaignPatch {
        monthly_goal: Some("250 leads".into()),
        main_result: Some("310 leads at a lower CPL".into()),
        raw_metrics: Some(
            "Summer Sale | Meta Ads | 5000 | 150000 | 7500 | 300 | 4.5\n\
             Brand Awareness | Google Ads | 3000 | 90000 | 2700 | 81 | 3.2"
                .into(),
        ),
        best_campaign: Some("Summer Sale".into()),
        what_didnt_work: Some("Display retargeting".into()),
        video_tone: Some(VideoTone::DataDriven),
        ..CampaignPatch::default()
    }));
    let idx = state.add_kpi(Some(KpiKind::Roas)).unwrap();
    let roas = state.kpi_mut(idx).unwrap();
    roas.set_input("revenue", "22500").unwrap();
    roas.set_input("investment", "5000").unwrap();
    state
}

fn transport_for(server: &MockServer) -> HttpTransport {
    HttpTransport::new(format!("{}{HOOK_PATH}", server.uri()), 5)
}

#[tokio::test]
async fn full_walkthrough_posts_one_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":\"success\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let mut wizard = WizardController::with_state(transport_for(&server), complete_state());
    assert_eq!(wizard.next(), Ok(Step::Client));
    assert_eq!(wizard.next(), Ok(Step::Data));
    assert_eq!(wizard.next(), Ok(Step::Generate));

    let receipt = wizard.submit().await.unwrap();
    assert_eq!(receipt.email, "ana@pixel.agency");
    assert_eq!(wizard.status(), SubmissionStatus::Completed);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["email"], "ana@pixel.agency");
    assert_eq!(body["clientName"], "Acme Shoes");
    assert_eq!(body["reportPeriod"], "March 2024");
    assert_eq!(body["videoTone"], "Data-driven");
    assert_eq!(body["triggered_from"], "video_report_generator");
    assert_eq!(
        body["highlightKpis"],
        serde_json::json!([{"name": "Return on Ad Spend (ROAS)", "value": "4.5x"}])
    );
    assert!(
        body["metricsRaw"]
            .as_str()
            .unwrap()
            .starts_with("Summer Sale | Meta Ads")
    );
    assert_eq!(body["timestamp"], receipt.submitted_at.as_str());
}

#[tokio::test]
async fn server_error_keeps_review_step_and_retry_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("temporarily unavailable"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut wizard = WizardController::with_state(transport_for(&server), complete_state());
    wizard.fast_forward().unwrap();

    let err = wizard.submit().await.unwrap_err();
    assert!(
        matches!(&err, SubmitError::Status { status: 500, body } if body == "temporarily unavailable"),
        "{err:?}"
    );
    assert_eq!(wizard.step(), Step::Generate);
    assert_eq!(wizard.status(), SubmissionStatus::Failed);

    wizard.submit().await.unwrap();
    assert_eq!(wizard.status(), SubmissionStatus::Completed);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_step_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut state = complete_state();
    state.update(StatePatch::Agency(AgencyPatch {
        email: Some("not-an-email".into()),
        ..AgencyPatch::default()
    }));
    let mut wizard = WizardController::with_state(transport_for(&server), state);

    assert!(wizard.fast_forward().is_err());
    assert_eq!(wizard.step(), Step::Basics);
    assert!(matches!(
        wizard.submit().await,
        Err(SubmitError::NotReady(Step::Basics))
    ));
}

#[tokio::test]
async fn custom_source_tag_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut wizard = WizardController::with_state(transport_for(&server), complete_state())
        .source_tag("agency_cli");
    wizard.fast_forward().unwrap();
    wizard.submit().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["triggered_from"], "agency_cli");
}

#[tokio::test]
async fn standalone_submit_posts_the_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let payload = submit::submit(&complete_state(), &transport_for(&server), "batch")
        .await
        .unwrap();
    assert_eq!(payload.triggered_from, "batch");
    assert_eq!(payload.email, "ana@pixel.agency");
}

#[tokio::test]
async fn abandoned_slow_submit_can_be_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut wizard = WizardController::with_state(transport_for(&server), complete_state());
    wizard.fast_forward().unwrap();

    let abandoned = tokio::time::timeout(Duration::from_millis(200), wizard.submit()).await;
    assert!(abandoned.is_err());
    assert_eq!(wizard.status(), SubmissionStatus::Failed);
    assert_eq!(wizard.step(), Step::Generate);

    wizard.submit().await.unwrap();
    assert_eq!(wizard.status(), SubmissionStatus::Completed);
}
