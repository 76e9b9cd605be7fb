//! Scoped HTTP session for the single probe request.

use std::time::Duration;

use crate::payload::AuthPayload;
use crate::{ProbeError, Result};

/// Production authenticate endpoint.
pub const ENDPOINT: &str = "https://clever-pika-819.convex.site/api/agent/authenticate";

/// Fixed per-request timeout. The probe carries no configuration surface,
/// so this is a constant rather than an env knob.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything captured from one HTTP exchange.
#[derive(Debug)]
pub struct ProbeResponse {
    pub status: u16,
    /// Headers in arrival order. Values that are not valid UTF-8 are
    /// rendered lossily; the report is for human eyes.
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

/// One reqwest client scoped to a single probe run.
///
/// Constructed inside the run and dropped when it returns, so the session
/// (and its connection pool) never outlives the request it served.
pub struct ProbeTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl ProbeTransport {
    /// Build the session. Non-default endpoints are a test seam; the binary
    /// always probes [`ENDPOINT`].
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload and await the response, capturing status, headers
    /// and the JSON-decoded body.
    ///
    /// A body that is not JSON surfaces as [`ProbeError::Decode`] carrying
    /// the status that produced it.
    pub async fn authenticate(&self, payload: &AuthPayload) -> Result<ProbeResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let text = response.text().await?;
        let body = serde_json::from_str(&text)
            .map_err(|source| ProbeError::Decode { status, source })?;

        Ok(ProbeResponse {
            status,
            headers,
            body,
        })
    }
}
