use thiserror::Error;

use crate::kpi::KpiKind;
use crate::wizard::Step;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `reportreel`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the binary continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum ReportError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── KPI selection ───────────────────────────────────────────────────
    #[error("kpi: {0}")]
    Kpi(#[from] KpiError),

    // ── Webhook submission ──────────────────────────────────────────────
    #[error("submit: {0}")]
    Submit(#[from] SubmitError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── KPI errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KpiError {
    #[error("at most {max} highlight KPIs can be selected")]
    LimitReached { max: usize },

    #[error("no KPI type selected for this entry")]
    KindNotSelected,

    #[error("{kind} has no input named `{field}`")]
    UnknownField { kind: KpiKind, field: String },

    #[error("unknown KPI type `{0}`")]
    UnknownKind(String),

    #[error("no KPI at position {0}")]
    NoSuchEntry(usize),
}

// ─── Submit errors ───────────────────────────────────────────────────────────

/// Every way the single webhook call can fail. Callers treat them uniformly:
/// show the message, stay on the review step, let the user retry by hand.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("webhook request failed: {0}")]
    Network(String),

    #[error("webhook returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("payload encoding failed: {0}")]
    Encode(String),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("submission is only possible from the final step (currently on {0})")]
    NotReady(Step),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
