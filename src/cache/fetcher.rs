//! Read path of the query cache.
//!
//! A read declares its [`QueryKey`] and the [`ResourceTag`]s it depends on.
//! Fresh entries are served from the store; misses and stale entries go to
//! the network through the in-flight map, so concurrent readers of the same
//! key share one request. On success the body is stored fresh and its tags
//! registered; on failure the cache is left untouched and the error
//! propagates to every waiter.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use futures::FutureExt;
use metrics::counter;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::config::CacheConfig;
use super::inflight::InFlightFetches;
use super::keys::{QueryKey, ResourceTag};
use super::registry::TagRegistry;
use super::store::QueryStore;
use crate::infra::ApiError;

pub struct ResourceFetcher {
    config: CacheConfig,
    store: Arc<QueryStore>,
    registry: Arc<TagRegistry>,
    inflight: InFlightFetches,
}

impl ResourceFetcher {
    pub fn new(config: CacheConfig, store: Arc<QueryStore>, registry: Arc<TagRegistry>) -> Self {
        Self {
            config,
            store,
            registry,
            inflight: InFlightFetches::new(),
        }
    }

    /// Resolve one query: cache hit, or a (possibly coalesced) network fetch.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: QueryKey,
        tags: Vec<ResourceTag>,
        fetch: F,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Bytes, ApiError>> + Send + 'static,
    {
        if self.config.enabled {
            if let Some(body) = self.store.get_fresh(&key) {
                counter!("mensa_cache_hit_total").increment(1);
                return decode(&body);
            }
            counter!("mensa_cache_miss_total").increment(1);
        }

        let shared = self.inflight.join_or_lead(key.clone(), || {
            let store = Arc::clone(&self.store);
            let registry = Arc::clone(&self.registry);
            let inflight = self.inflight.clone();
            let enabled = self.config.enabled;
            let key = key.clone();
            let request = fetch();

            async move {
                let outcome = request.await;
                inflight.finish(&key);
                match outcome {
                    Ok(body) => {
                        if enabled {
                            if let Some(evicted) = store.insert(key.clone(), body.clone()) {
                                registry.unregister(&evicted);
                            }
                            registry.register(key, tags);
                        }
                        Ok(body)
                    }
                    Err(err) => {
                        debug!(error = %err, "Fetch failed; cache left untouched");
                        Err(Arc::new(err))
                    }
                }
            }
            .boxed()
            .shared()
        });

        let body = shared.await.map_err(ApiError::Shared)?;
        decode(&body)
    }

    /// Read whatever is cached for a key, fresh or stale, without touching
    /// the network. Returns the value and whether it was stale.
    pub fn peek<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<(T, bool)> {
        if !self.config.enabled {
            return None;
        }
        let entry = self.store.get_any(key)?;
        serde_json::from_slice(&entry.body)
            .ok()
            .map(|value| (value, entry.stale))
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}
