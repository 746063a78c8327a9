//! Pure business rules shared by the services and the CLI.
//!
//! Nothing in this module touches the network or the cache; everything is
//! deterministic and unit-tested in place.

pub mod error;
pub mod orders;
pub mod scopes;
pub mod settlement;

pub use error::DomainError;
