//! # Lifecycle & Orchestration
//!
//! The composition root owns what the rest of the crate only borrows: it
//! constructs the registry actor once at startup, spawns its task, hands out
//! client handles, and coordinates the drop-clients-then-join shutdown. The
//! registry is explicitly constructed state with process-scoped lifetime —
//! never an ambient global.
//!
//! Tracing setup lives here too, since installing the subscriber is a
//! process-level concern.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
