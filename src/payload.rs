//! The fixed authentication payload.

use serde::Serialize;

/// Placeholder request id. The server is expected to reject it; the probe
/// exists to observe that rejection.
pub const REQUEST_ID: &str = "req_test123";

pub const AGENT_ID: &str = "agent_mt7XkrbQSKoDLN1l";

pub const AGENT_SECRET: &str = "yf3U2h-eTQCIyGGOsYwTWpr5_BsmtrnI1QZjeHcKGY4";

pub const MODEL: &str = "browser-use";

/// The four-field body POSTed to the authenticate endpoint.
///
/// Built once per run from the literals above and discarded afterward.
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    pub request_id: String,
    pub agent_id: String,
    pub agent_secret: String,
    pub model: String,
}

impl AuthPayload {
    /// The one payload this probe ever sends.
    pub fn fixed() -> Self {
        Self {
            request_id: REQUEST_ID.to_string(),
            agent_id: AGENT_ID.to_string(),
            agent_secret: AGENT_SECRET.to_string(),
            model: MODEL.to_string(),
        }
    }
}
