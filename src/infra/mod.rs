//! Infrastructure adapters: HTTP transport, session state, telemetry.

pub mod endpoints;
pub mod http;
pub mod session;
pub mod telemetry;

pub use http::{ApiError, HttpClient};
pub use session::{Session, SessionState};
