//! Console rendering of the exchange.
//!
//! The report is the probe's product, so it goes to stdout with `println!`
//! rather than through `tracing`.

use crate::outcome::Outcome;
use crate::payload::AuthPayload;
use crate::transport::ProbeResponse;

pub fn banner(endpoint: &str) {
    println!("{}", "=".repeat(60));
    println!("Probing POST {}", endpoint);
    println!("{}", "=".repeat(60));
}

pub fn print_request(endpoint: &str, payload: &AuthPayload) {
    println!("\n📤 Sending POST to: {}", endpoint);
    println!("📦 Payload:");
    println!("{}", pretty_payload(payload));
}

pub fn print_response(response: &ProbeResponse) {
    println!("\n📥 Response Status: {}", response.status);
    println!("📋 Response Headers:");
    for (name, value) in &response.headers {
        println!("   {}: {}", name, value);
    }
    println!("\n📄 Response Body:");
    println!("{}", pretty_body(&response.body));
}

pub fn print_verdict(outcome: &Outcome) {
    match outcome {
        Outcome::Success => println!("\n✅ POST request SUCCEEDED!"),
        Outcome::Rejected {
            error_description: Some(description),
        } => println!(
            "\n⚠️  POST request reached the server but was rejected: {}",
            description
        ),
        Outcome::Rejected {
            error_description: None,
        } => println!("\n⚠️  POST request reached the server but was rejected (no error_description)"),
        Outcome::Failed { status } => {
            println!("\n❌ POST request failed with status {}", status)
        }
    }
}

fn pretty_payload(payload: &AuthPayload) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| format!("{:?}", payload))
}

fn pretty_body(body: &serde_json::Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_pretty_print_is_indented_json() {
        let rendered = pretty_payload(&AuthPayload::fixed());

        assert!(rendered.starts_with('{'));
        assert!(rendered.contains("\n  \"request_id\""));
        assert!(rendered.contains("\"model\": \"browser-use\""));
    }
}
