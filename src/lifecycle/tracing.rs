//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the whole storefront:
//! compact lines, no module paths, level filter from `RUST_LOG`.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Request payloads and actor traffic
//! RUST_LOG=debug cargo run
//!
//! # Only the actor framework
//! RUST_LOG=qkart::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Entity Operations**: Create, Get, List and Actions, with ids as structured fields
//! - **Client Calls**: one span per client or API method (`#[instrument]`)
//! - **Cart**: stale entries dropped during reconciliation (`warn`)
//!
//! Passwords and bearer tokens are never recorded: `Credentials` and `Session` redact them
//! in `Debug`, and API methods skip the `token` argument.
//!
//! ## Workflow Trace Example
//!
//! A checkout against the in-memory backend with `RUST_LOG=info`:
//!
//! ```text
//! INFO checkout: Action ok entity_type="Account" id=crio.do
//! INFO checkout: Order placed username=crio.do total=45.0 balance=4955.0 address_id=address_1
//! INFO checkout: Checkout complete total=45.0 balance=4955.0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
