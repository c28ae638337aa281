//! The registry engine: request types, the actor that owns the record set,
//! the channel client, and mock utilities for tests.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::RegistryActor;
pub use client::RegistryClient;
pub use error::RegistryError;
pub use message::{RegistryRequest, Response};
