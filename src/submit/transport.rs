use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use super::Payload;
use crate::error::SubmitError;
use crate::utils::text::body_excerpt;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Delivers a finished payload somewhere.
///
/// The wizard never talks HTTP directly; it is handed a transport. Any `Ok`
/// means the receiver accepted the report.
pub trait WebhookTransport: Send + Sync {
    /// Short name for logs (e.g. the host being posted to).
    fn name(&self) -> &str;

    /// Sends `payload` exactly once.
    fn post_json<'a>(
        &'a self,
        payload: &'a Payload,
    ) -> Pin<Box<dyn Future<Output = Result<(), SubmitError>> + Send + 'a>>;
}

/// POSTs payloads as JSON to a fixed URL.
pub struct HttpTransport {
    url: String,
    host: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        let url = url.into();
        let host = url::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "webhook".to_string());
        Self {
            url,
            host,
            client: build_client(timeout_secs),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
        .pool_max_idle_per_host(1)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|_| Client::new())
}

impl WebhookTransport for HttpTransport {
    fn name(&self) -> &str {
        &self.host
    }

    fn post_json<'a>(
        &'a self,
        payload: &'a Payload,
    ) -> Pin<Box<dyn Future<Output = Result<(), SubmitError>> + Send + 'a>> {
        Box::pin(async move {
            let body = serde_json::to_vec(payload)?;
            let response = self
                .client
                .post(&self.url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SubmitError::Status {
                    status: status.as_u16(),
                    body: body_excerpt(&body, MAX_ERROR_BODY_CHARS),
                });
            }

            tracing::debug!(host = %self.host, status = status.as_u16(), "webhook accepted payload");
            Ok(())
        })
    }
}
