//! In-flight request tracking.
//!
//! Coalesces concurrent fetches of the same query: the first caller becomes
//! the leader and runs the request, later callers await a shared handle to
//! the same future. We rely on single-process use: everything shares this
//! map through the client handle.

use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use futures::future::{BoxFuture, Shared};
use metrics::counter;

use super::keys::QueryKey;
use crate::infra::ApiError;

/// Result of a coalesced fetch. The error is shared between every waiter,
/// so it rides in an [`Arc`].
pub type SharedFetchResult = Result<Bytes, Arc<ApiError>>;

type SharedFetch = Shared<BoxFuture<'static, SharedFetchResult>>;

#[derive(Default, Clone)]
pub struct InFlightFetches {
    fetches: Arc<DashMap<QueryKey, SharedFetch>>,
}

impl InFlightFetches {
    pub fn new() -> Self {
        Self {
            fetches: Arc::new(DashMap::new()),
        }
    }

    /// Join an in-flight fetch for `key`, or install `make()` as the leader.
    /// Returns the shared handle to await. The leader future must call
    /// [`InFlightFetches::finish`] before resolving.
    pub fn join_or_lead(
        &self,
        key: QueryKey,
        make: impl FnOnce() -> Shared<BoxFuture<'static, SharedFetchResult>>,
    ) -> SharedFetch {
        use dashmap::mapref::entry::Entry;

        match self.fetches.entry(key) {
            Entry::Occupied(occupied) => {
                counter!("mensa_cache_coalesced_total").increment(1);
                occupied.get().clone()
            }
            Entry::Vacant(vacant) => {
                let shared = make();
                vacant.insert(shared.clone());
                shared
            }
        }
    }

    /// Drop the in-flight entry once the request settles, success or not.
    pub fn finish(&self, key: &QueryKey) {
        self.fetches.remove(key);
    }

    pub fn len(&self) -> usize {
        self.fetches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    fn ready_fetch(body: &'static [u8]) -> SharedFetch {
        async move { Ok(Bytes::from_static(body)) }.boxed().shared()
    }

    #[tokio::test]
    async fn second_caller_joins_the_leader() {
        let inflight = InFlightFetches::new();

        let first = inflight.join_or_lead(QueryKey::GroupList, || ready_fetch(b"lead"));
        let second = inflight.join_or_lead(QueryKey::GroupList, || ready_fetch(b"other"));

        assert_eq!(inflight.len(), 1);
        assert_eq!(first.await.unwrap(), Bytes::from_static(b"lead"));
        assert_eq!(second.await.unwrap(), Bytes::from_static(b"lead"));
    }

    #[tokio::test]
    async fn finish_releases_the_slot() {
        let inflight = InFlightFetches::new();

        let _handle = inflight.join_or_lead(QueryKey::GroupList, || ready_fetch(b"a"));
        inflight.finish(&QueryKey::GroupList);
        assert!(inflight.is_empty());

        let fresh = inflight.join_or_lead(QueryKey::GroupList, || ready_fetch(b"b"));
        assert_eq!(fresh.await.unwrap(), Bytes::from_static(b"b"));
    }
}
