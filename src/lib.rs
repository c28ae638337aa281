//! # Corp Registry
//!
//! > An in-process person registry with aggregate statistics, built on
//! > resource-oriented actors.
//!
//! The crate manages a small registry of person records — employees and
//! managers — and exposes creation, lookup, listing, and statistics over the
//! live record set. State is owned by a single actor task; callers talk to
//! it through cheap-to-clone clients.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One critical section, no locks
//!
//! The registry's invariants (identifiers strictly increasing from 1, never
//! reused; no reader observes a half-inserted record) all hinge on one rule:
//! counter increment and insertion happen atomically. Instead of a `Mutex`,
//! the [`RegistryActor`](registry::RegistryActor) processes requests
//! sequentially in its own Tokio task — the message loop *is* the critical
//! section, and concurrent callers simply queue.
//!
//! ### Sum type over inheritance
//!
//! [`Person`](model::Person) is a tagged union of `Employee` and `Manager`.
//! Role identification is a total `match`, so the boundary never needs a
//! dynamic type test, and the serialized shape carries the discriminator
//! directly.
//!
//! ### Validate first, number later
//!
//! Factories validate payloads *before* an identifier is assigned. A
//! rejected request consumes nothing: the id sequence observed by callers is
//! exactly `1..=N` for N successful additions.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! `Person` and its variants, validated creation payloads, and the
//! [`Statistics`](model::Statistics) aggregate.
//!
//! ### 2. The Engine ([`registry`])
//! The request enum, the actor owning store and counter, the channel client,
//! and mock utilities for testing client logic without a live actor.
//!
//! ### 3. The Interface ([`clients`])
//! The [`PersonDirectory`](clients::PersonDirectory) contract — the narrow
//! surface a boundary layer (HTTP, CLI, tests) programs against — and its
//! channel-backed [`PersonClient`](clients::PersonClient).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RegistrySystem`](lifecycle::RegistrySystem) spins the registry up at
//! process start and shuts it down gracefully at exit.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo walkthrough with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the test suite
//! cargo test
//! ```
//!
//! Deletion is intentionally unfinished: `remove_person` always fails with
//! either `NotFound` or `NotImplemented` and never mutates the registry.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod registry;
