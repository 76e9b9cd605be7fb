//! One-shot diagnostic probe for the agent authenticate endpoint.
//!
//! Sends a single POST with a fixed payload and pretty-prints whatever came
//! back. The request id is a known placeholder, so a rejection verdict is
//! the expected result against production. Always exits 0: the output is
//! read by a human, not a pipeline.

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    if let Err(e) = agent_auth_probe::probe::run().await {
        let e = anyhow::Error::from(e);
        println!("\n❌ Error: {}", e);
        // Debug-format renders the cause chain (and a backtrace under
        // RUST_BACKTRACE=1), the closest thing to a traceback here.
        println!("{:?}", e);
    }
}
