//! Report payload assembly and delivery to the webhook.

mod payload;
mod transport;

use chrono::Utc;

use crate::error::SubmitError;
use crate::wizard::WizardState;

pub use payload::{Payload, assemble};
pub use transport::{HttpTransport, WebhookTransport};

/// Value of `triggered_from` unless configured otherwise.
pub const DEFAULT_SOURCE_TAG: &str = "video_report_generator";

/// Posts an already stamped payload once. No retry.
pub async fn deliver<T>(payload: &Payload, transport: &T) -> Result<(), SubmitError>
where
    T: WebhookTransport + ?Sized,
{
    tracing::info!(
        transport = transport.name(),
        kpis = payload.highlight_kpis.len(),
        "submitting report"
    );
    match transport.post_json(payload).await {
        Ok(()) => {
            tracing::info!(transport = transport.name(), "report submitted");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(transport = transport.name(), error = %err, "report submission failed");
            Err(err)
        }
    }
}

/// Stamps the state with the current time and posts it once.
pub async fn submit<T>(
    state: &WizardState,
    transport: &T,
    source_tag: &str,
) -> Result<Payload, SubmitError>
where
    T: WebhookTransport + ?Sized,
{
    let payload = assemble(state, source_tag, Utc::now());
    deliver(&payload, transport).await?;
    Ok(payload)
}
