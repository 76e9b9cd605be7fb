//! The single best-effort probe run.

use std::time::Instant;

use tracing::debug;

use crate::outcome::{classify, Outcome};
use crate::payload::AuthPayload;
use crate::report;
use crate::transport::{ProbeTransport, ENDPOINT};
use crate::Result;

/// Run the probe against the production endpoint.
pub async fn run() -> Result<Outcome> {
    run_against(ENDPOINT).await
}

/// Run the probe against `endpoint`.
///
/// Split out so tests can aim the probe at a local server; the binary only
/// ever calls [`run`]. One attempt, no retries: transport and decode errors
/// propagate to the caller.
pub async fn run_against(endpoint: &str) -> Result<Outcome> {
    let payload = AuthPayload::fixed();
    let transport = ProbeTransport::with_endpoint(endpoint)?;

    report::banner(transport.endpoint());
    report::print_request(transport.endpoint(), &payload);

    let start = Instant::now();
    let response = transport.authenticate(&payload).await?;
    debug!(
        status = response.status,
        duration_ms = start.elapsed().as_millis() as u64,
        "exchange complete"
    );

    report::print_response(&response);

    let outcome = classify(response.status, &response.body);
    report::print_verdict(&outcome);

    Ok(outcome)
}
