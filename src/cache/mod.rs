//! Tag-invalidated query cache.
//!
//! Caches raw response bodies keyed by [`QueryKey`]. Each cached read
//! registers the [`ResourceTag`]s it depends on; each committed write is
//! described as a [`MutationKind`] and synchronously marks every dependent
//! query stale. Stale entries keep their payload until the next successful
//! refetch, and concurrent fetches of the same key share one request.
//!
//! ## Configuration
//!
//! ```toml
//! [cache]
//! enabled = true
//! query_limit = 256
//! ```

mod config;
mod events;
mod fetcher;
mod inflight;
mod keys;
mod lock;
mod planner;
mod registry;
mod store;
mod trigger;

pub use config::CacheConfig;
pub use events::MutationKind;
pub use fetcher::ResourceFetcher;
pub use inflight::{InFlightFetches, SharedFetchResult};
pub use keys::{QueryKey, ResourceTag};
pub use planner::InvalidationPlan;
pub use registry::TagRegistry;
pub use store::{CachedQuery, QueryStore};
pub use trigger::CacheTrigger;
