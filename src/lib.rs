//! Mensa client core.
//!
//! A typed client for the Mensa group lunch-ordering REST API. The crate is
//! layered the same way front to back:
//!
//! - [`domain`]: pure rules — the order-status state machine, per-capability
//!   scopes, and balance-settlement arithmetic.
//! - [`cache`]: the resource cache — tagged query results, request
//!   coalescing, and the mutation → invalidation dependency graph.
//! - [`infra`]: HTTP transport, session context, telemetry.
//! - [`application`]: one service per resource, wiring reads through the
//!   cache and writes through the invalidation walk.
//!
//! The `mensa` binary under `src/bin/` is a thin command surface over
//! [`application::MensaClient`].

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;

pub use application::MensaClient;
