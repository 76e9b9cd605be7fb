use thiserror::Error;

/// Unified error type for the probe.
///
/// Everything that can interrupt the single exchange collapses into two
/// categories: the request never completed, or the body came back but was
/// not JSON. Both propagate to the binary's top level; neither is retried.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response body is not JSON (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
