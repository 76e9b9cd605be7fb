//! # agent-auth-probe
//!
//! One-shot diagnostic probe for a remote agent-authentication endpoint.
//!
//! The probe builds a fixed four-field JSON payload, opens one scoped HTTP
//! session, POSTs to the authenticate endpoint, pretty-prints the status,
//! headers and body, and classifies the result into a verdict. Console
//! output is the whole product: nothing is persisted or retried, and the
//! process exits 0 regardless of what the server said.
//!
//! The `request_id` it sends is a known placeholder, so against production
//! the expected verdict is a rejection; the probe exists to watch that
//! path, not to pass.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`payload`] | The fixed request payload and its literal values |
//! | [`transport`] | Scoped HTTP session and response capture |
//! | [`outcome`] | Classification of status + body into a verdict |
//! | [`report`] | Console rendering of the exchange |
//! | [`probe`] | The single best-effort run |

pub mod outcome;
pub mod payload;
pub mod probe;
pub mod report;
pub mod transport;

// Re-export main types for convenience
pub use outcome::Outcome;
pub use payload::AuthPayload;
pub use transport::{ProbeResponse, ProbeTransport, ENDPOINT};

/// Result type alias for the probe
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Error type for the probe
pub mod error;
pub use error::ProbeError;
