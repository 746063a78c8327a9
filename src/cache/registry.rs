//! Bidirectional tag registry.
//!
//! Tracks which cached queries depend on which resource tags, so a mutation
//! that dirties a tag can find every query to mark stale, and an evicted
//! query can drop its tag links.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use super::keys::{QueryKey, ResourceTag};
use super::lock;

/// Maps tag → queries and query → tags.
pub struct TagRegistry {
    tag_to_queries: RwLock<HashMap<ResourceTag, HashSet<QueryKey>>>,
    query_to_tags: RwLock<HashMap<QueryKey, HashSet<ResourceTag>>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self {
            tag_to_queries: RwLock::new(HashMap::new()),
            query_to_tags: RwLock::new(HashMap::new()),
        }
    }

    /// Record that a query's cached body was produced from these tags.
    /// Re-registering replaces the previous tag set.
    pub fn register(&self, query: QueryKey, tags: impl IntoIterator<Item = ResourceTag>) {
        let tags: HashSet<ResourceTag> = tags.into_iter().collect();

        let mut t2q = lock::write(&self.tag_to_queries, "register");
        let mut q2t = lock::write(&self.query_to_tags, "register");

        if let Some(old_tags) = q2t.remove(&query) {
            for tag in old_tags {
                if let Some(queries) = t2q.get_mut(&tag) {
                    queries.remove(&query);
                    if queries.is_empty() {
                        t2q.remove(&tag);
                    }
                }
            }
        }

        for tag in &tags {
            t2q.entry(tag.clone()).or_default().insert(query.clone());
        }
        q2t.insert(query, tags);
    }

    /// All queries that depend on a tag.
    pub fn queries_for_tag(&self, tag: &ResourceTag) -> HashSet<QueryKey> {
        lock::read(&self.tag_to_queries, "queries_for_tag")
            .get(tag)
            .cloned()
            .unwrap_or_default()
    }

    /// Union of queries depending on any of the given tags.
    pub fn queries_for_tags<'a>(
        &self,
        tags: impl IntoIterator<Item = &'a ResourceTag>,
    ) -> HashSet<QueryKey> {
        let t2q = lock::read(&self.tag_to_queries, "queries_for_tags");
        let mut out = HashSet::new();
        for tag in tags {
            if let Some(queries) = t2q.get(tag) {
                out.extend(queries.iter().cloned());
            }
        }
        out
    }

    /// The tags a query registered under.
    pub fn tags_for_query(&self, query: &QueryKey) -> HashSet<ResourceTag> {
        lock::read(&self.query_to_tags, "tags_for_query")
            .get(query)
            .cloned()
            .unwrap_or_default()
    }

    /// Drop a query and its tag links. Called on LRU eviction.
    pub fn unregister(&self, query: &QueryKey) {
        let mut t2q = lock::write(&self.tag_to_queries, "unregister");
        let mut q2t = lock::write(&self.query_to_tags, "unregister");

        if let Some(tags) = q2t.remove(query) {
            for tag in tags {
                if let Some(queries) = t2q.get_mut(&tag) {
                    queries.remove(query);
                    if queries.is_empty() {
                        t2q.remove(&tag);
                    }
                }
            }
        }
    }

    pub fn clear(&self) {
        lock::write(&self.tag_to_queries, "clear").clear();
        lock::write(&self.query_to_tags, "clear").clear();
    }

    pub fn tag_count(&self) -> usize {
        lock::read(&self.tag_to_queries, "tag_count").len()
    }

    pub fn query_count(&self) -> usize {
        lock::read(&self.query_to_tags, "query_count").len()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn register_and_lookup() {
        let registry = TagRegistry::new();
        let group = Uuid::from_u128(1);

        registry.register(
            QueryKey::OrderList(group),
            [ResourceTag::OrderList(group)],
        );

        let queries = registry.queries_for_tag(&ResourceTag::OrderList(group));
        assert!(queries.contains(&QueryKey::OrderList(group)));

        let tags = registry.tags_for_query(&QueryKey::OrderList(group));
        assert!(tags.contains(&ResourceTag::OrderList(group)));
    }

    #[test]
    fn multiple_queries_share_a_tag() {
        let registry = TagRegistry::new();
        let group = Uuid::from_u128(1);
        let user = Uuid::from_u128(2);

        registry.register(
            QueryKey::BalanceList(group),
            [ResourceTag::BalanceList(group)],
        );
        registry.register(
            QueryKey::BalanceHistory {
                group_id: group,
                user_id: user,
            },
            [
                ResourceTag::BalanceList(group),
                ResourceTag::BalanceHistory {
                    group_id: group,
                    user_id: user,
                },
            ],
        );

        let queries = registry.queries_for_tag(&ResourceTag::BalanceList(group));
        assert_eq!(queries.len(), 2);
    }

    #[test]
    fn reregister_replaces_tag_set() {
        let registry = TagRegistry::new();
        let group = Uuid::from_u128(1);

        registry.register(QueryKey::GroupList, [ResourceTag::GroupList]);
        registry.register(QueryKey::GroupList, [ResourceTag::Group(group)]);

        assert!(
            registry
                .queries_for_tag(&ResourceTag::GroupList)
                .is_empty()
        );
        assert!(
            registry
                .queries_for_tag(&ResourceTag::Group(group))
                .contains(&QueryKey::GroupList)
        );
    }

    #[test]
    fn unregister_cleans_both_directions() {
        let registry = TagRegistry::new();

        registry.register(QueryKey::GroupList, [ResourceTag::GroupList]);
        assert_eq!(registry.query_count(), 1);
        assert_eq!(registry.tag_count(), 1);

        registry.unregister(&QueryKey::GroupList);
        assert_eq!(registry.query_count(), 0);
        assert_eq!(registry.tag_count(), 0);
    }

    #[test]
    fn queries_for_tags_unions() {
        let registry = TagRegistry::new();
        let group = Uuid::from_u128(1);
        let order = Uuid::from_u128(2);

        registry.register(QueryKey::OrderList(group), [ResourceTag::OrderList(group)]);
        registry.register(QueryKey::Order(order), [ResourceTag::Order(order)]);

        let queries = registry.queries_for_tags(
            [
                ResourceTag::OrderList(group),
                ResourceTag::Order(order),
                ResourceTag::GroupList,
            ]
            .iter(),
        );
        assert_eq!(queries.len(), 2);
    }

    #[test]
    fn clear_removes_everything() {
        let registry = TagRegistry::new();
        registry.register(QueryKey::GroupList, [ResourceTag::GroupList]);

        registry.clear();
        assert_eq!(registry.query_count(), 0);
        assert_eq!(registry.tag_count(), 0);
    }
}
