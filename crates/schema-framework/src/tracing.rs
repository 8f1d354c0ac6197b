//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for binaries built on the framework.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup and shutdown with the entity count
//! - **Store Operations**: `Get`, `List` and `Inserted` events with `entity_type`, `id`, `size`
//! - **Client Calls**: one span per `fetch`/`fetch_all`, carrying the argument
//! - **Transport**: the operation name, plus a warning for every failed or timed-out call
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show every request and lookup
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a single fetch reads:
//!
//! ```text
//! DEBUG fetch_user:fetch: Sending request id="2" entity_type="User"
//! DEBUG fetch_user:fetch: Get entity_type="User" id=2 found=true
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the source instead of module paths
        .compact()
        .init();
}
