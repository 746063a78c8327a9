//! Cache trigger.
//!
//! Applies invalidation synchronously after a mutation commits: plan the
//! tags, walk the registry, mark affected queries stale. Stale entries keep
//! their payload so readers can show the last known data while refetching.

use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use super::config::CacheConfig;
use super::events::MutationKind;
use super::planner::InvalidationPlan;
use super::registry::TagRegistry;
use super::store::QueryStore;

pub struct CacheTrigger {
    config: CacheConfig,
    store: Arc<QueryStore>,
    registry: Arc<TagRegistry>,
}

impl CacheTrigger {
    pub fn new(config: CacheConfig, store: Arc<QueryStore>, registry: Arc<TagRegistry>) -> Self {
        Self {
            config,
            store,
            registry,
        }
    }

    /// Invalidate after one committed mutation.
    pub fn mutation_committed(&self, mutation: MutationKind) {
        self.mutations_committed(&[mutation]);
    }

    /// Invalidate after a batch of committed mutations. Runs on the caller's
    /// thread before the mutation result is returned, so a read issued right
    /// after a write never sees the pre-write cache as fresh.
    pub fn mutations_committed(&self, mutations: &[MutationKind]) {
        if !self.config.enabled {
            return;
        }

        let plan = InvalidationPlan::from_mutations(mutations);
        if plan.is_empty() {
            return;
        }

        if plan.clear_all {
            debug!(mutations = mutations.len(), "Clearing entire query cache");
            self.store.clear();
            self.registry.clear();
            return;
        }

        let mut marked = 0u64;
        for query in self.registry.queries_for_tags(plan.tags.iter()) {
            if self.store.mark_stale(&query) {
                marked += 1;
            }
        }
        counter!("mensa_cache_invalidated_total").increment(marked);

        debug!(
            mutations = mutations.len(),
            tags = plan.tags.len(),
            marked_stale = marked,
            "Applied cache invalidation"
        );
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use uuid::Uuid;

    use super::*;
    use crate::cache::keys::{QueryKey, ResourceTag};

    fn setup(enabled: bool) -> (CacheTrigger, Arc<QueryStore>, Arc<TagRegistry>) {
        let config = CacheConfig {
            enabled,
            ..Default::default()
        };
        let store = Arc::new(QueryStore::new(&config));
        let registry = Arc::new(TagRegistry::new());
        let trigger = CacheTrigger::new(config, Arc::clone(&store), Arc::clone(&registry));
        (trigger, store, registry)
    }

    #[test]
    fn mutation_marks_dependent_queries_stale() {
        let (trigger, store, registry) = setup(true);
        let group = Uuid::from_u128(1);

        store.insert(QueryKey::OrderList(group), Bytes::from_static(b"[]"));
        registry.register(QueryKey::OrderList(group), [ResourceTag::OrderList(group)]);
        store.insert(QueryKey::GroupList, Bytes::from_static(b"[]"));
        registry.register(QueryKey::GroupList, [ResourceTag::GroupList]);

        trigger.mutation_committed(MutationKind::OrderCreated { group_id: group });

        assert!(store.get_fresh(&QueryKey::OrderList(group)).is_none());
        assert!(store.get_fresh(&QueryKey::GroupList).is_some());
    }

    #[test]
    fn stale_payload_survives_invalidation() {
        let (trigger, store, registry) = setup(true);
        let group = Uuid::from_u128(1);

        store.insert(QueryKey::BalanceList(group), Bytes::from_static(b"[1]"));
        registry.register(
            QueryKey::BalanceList(group),
            [ResourceTag::BalanceList(group)],
        );

        trigger.mutation_committed(MutationKind::BalanceAdjusted {
            group_id: group,
            user_id: Uuid::from_u128(9),
        });

        let entry = store
            .get_any(&QueryKey::BalanceList(group))
            .expect("payload kept");
        assert!(entry.stale);
        assert_eq!(entry.body, Bytes::from_static(b"[1]"));
    }

    #[test]
    fn logout_clears_store_and_registry() {
        let (trigger, store, registry) = setup(true);

        store.insert(QueryKey::GroupList, Bytes::from_static(b"[]"));
        registry.register(QueryKey::GroupList, [ResourceTag::GroupList]);

        trigger.mutation_committed(MutationKind::LoggedOut);

        assert!(store.is_empty());
        assert_eq!(registry.query_count(), 0);
    }

    #[test]
    fn disabled_cache_skips_invalidation() {
        let (trigger, store, registry) = setup(false);
        let group = Uuid::from_u128(1);

        store.insert(QueryKey::OrderList(group), Bytes::from_static(b"[]"));
        registry.register(QueryKey::OrderList(group), [ResourceTag::OrderList(group)]);

        trigger.mutation_committed(MutationKind::OrderCreated { group_id: group });

        // Entry untouched; disabled cache never serves it anyway.
        assert!(store.get_fresh(&QueryKey::OrderList(group)).is_some());
    }
}
