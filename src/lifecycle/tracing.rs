//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole process.
//!
//! The subscriber uses the compact format with module targets hidden — the
//! registry already logs structured fields (`id`, `size`, `error`), so the
//! target column would only add noise. Levels come from `RUST_LOG`:
//!
//! ```bash
//! # Workflow-level logs
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! What gets traced:
//!
//! - **Registry lifecycle**: startup, shutdown with final record count
//! - **Operations**: Add, Get, List, Remove, Statistics, each with its
//!   identifiers and outcome
//! - **Rejections**: validation failures and unsupported operations with the
//!   reason attached

/// Installs the global tracing subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
