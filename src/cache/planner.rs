//! Invalidation plan generation.
//!
//! Merges a batch of mutations into one deduplicated set of tags to dirty.
//! The invalidation graph lives here: every rule about which reads a write
//! affects is a match arm in [`InvalidationPlan::from_mutations`].

use std::collections::HashSet;
use std::fmt;

use mensa_api_types::OrderStatus;

use super::events::MutationKind;
use super::keys::ResourceTag;

/// Tags to dirty after a batch of mutations.
#[derive(Debug, Default)]
pub struct InvalidationPlan {
    pub tags: HashSet<ResourceTag>,
    /// Drop the whole cache instead of walking tags. Set on logout, where
    /// anything cached belongs to the previous identity.
    pub clear_all: bool,
}

impl fmt::Display for InvalidationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InvalidationPlan {{ tags: {}, clear_all: {} }}",
            self.tags.len(),
            self.clear_all,
        )
    }
}

impl InvalidationPlan {
    /// Merge mutations into a plan. Duplicate tags collapse via the set.
    pub fn from_mutations(mutations: &[MutationKind]) -> Self {
        let mut plan = Self::default();

        for mutation in mutations {
            match mutation {
                MutationKind::LoggedIn => {
                    plan.tags.insert(ResourceTag::Auth);
                }
                MutationKind::LoggedOut => {
                    plan.clear_all = true;
                }
                // Registration does not touch any cached state of the
                // current session.
                MutationKind::Registered => {}
                MutationKind::ProfileUpdated { user_id } => {
                    plan.tags.insert(ResourceTag::Auth);
                    plan.tags.insert(ResourceTag::User(*user_id));
                    plan.tags.insert(ResourceTag::UserList);
                }
                MutationKind::UserAdministered { user_id } => {
                    plan.tags.insert(ResourceTag::User(*user_id));
                    plan.tags.insert(ResourceTag::UserList);
                }

                MutationKind::GroupCreated => {
                    plan.tags.insert(ResourceTag::GroupList);
                }
                MutationKind::GroupUpdated { group_id } => {
                    plan.tags.insert(ResourceTag::Group(*group_id));
                    plan.tags.insert(ResourceTag::GroupList);
                }
                MutationKind::GroupDeleted { group_id } => {
                    plan.tags.insert(ResourceTag::Group(*group_id));
                    plan.tags.insert(ResourceTag::GroupList);
                }
                MutationKind::MembersChanged { group_id } => {
                    plan.tags.insert(ResourceTag::Group(*group_id));
                    plan.tags.insert(ResourceTag::MemberList(*group_id));
                }
                MutationKind::InvitationsChanged { group_id } => {
                    plan.tags.insert(ResourceTag::InvitationList(*group_id));
                }
                MutationKind::InvitationAnswered => {
                    plan.tags.insert(ResourceTag::GroupList);
                }

                MutationKind::RestaurantCreated { group_id } => {
                    plan.tags.insert(ResourceTag::RestaurantList(*group_id));
                }
                MutationKind::RestaurantUpdated {
                    group_id,
                    restaurant_id,
                }
                | MutationKind::RestaurantDeleted {
                    group_id,
                    restaurant_id,
                } => {
                    plan.tags.insert(ResourceTag::RestaurantList(*group_id));
                    plan.tags.insert(ResourceTag::Restaurant(*restaurant_id));
                }
                MutationKind::DishesChanged { restaurant_id } => {
                    plan.tags.insert(ResourceTag::Restaurant(*restaurant_id));
                    plan.tags.insert(ResourceTag::DishList(*restaurant_id));
                }

                MutationKind::OrderCreated { group_id } => {
                    plan.tags.insert(ResourceTag::OrderList(*group_id));
                    plan.tags.insert(ResourceTag::ActiveOrder(*group_id));
                    // An order may name a restaurant that did not exist yet.
                    plan.tags.insert(ResourceTag::RestaurantList(*group_id));
                }
                MutationKind::OrderStatusChanged {
                    group_id,
                    order_id,
                    new_status,
                } => {
                    plan.tags.insert(ResourceTag::Order(*order_id));
                    plan.tags.insert(ResourceTag::OrderList(*group_id));
                    plan.tags.insert(ResourceTag::ActiveOrder(*group_id));
                    // Settlement happens only when the order finishes; that is
                    // the one transition that moves money.
                    if *new_status == OrderStatus::Finished {
                        plan.tags.insert(ResourceTag::BalanceList(*group_id));
                        plan.tags.insert(ResourceTag::GroupAnalytics(*group_id));
                        plan.tags.insert(ResourceTag::UserAnalytics);
                    }
                }
                MutationKind::DeliveryFeeSet { group_id, order_id } => {
                    plan.tags.insert(ResourceTag::Order(*order_id));
                    plan.tags.insert(ResourceTag::ActiveOrder(*group_id));
                }
                MutationKind::OrderItemsChanged { group_id, order_id } => {
                    plan.tags.insert(ResourceTag::Order(*order_id));
                    plan.tags.insert(ResourceTag::OrderItemList(*order_id));
                    plan.tags.insert(ResourceTag::ActiveOrder(*group_id));
                }
                MutationKind::FavoriteToggled {
                    group_id,
                    restaurant_id,
                } => {
                    plan.tags.insert(ResourceTag::FavoriteList {
                        group_id: *group_id,
                        restaurant_id: *restaurant_id,
                    });
                }

                MutationKind::BalanceAdjusted { group_id, user_id } => {
                    plan.tags.insert(ResourceTag::BalanceList(*group_id));
                    plan.tags.insert(ResourceTag::BalanceHistory {
                        group_id: *group_id,
                        user_id: *user_id,
                    });
                }
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && !self.clear_all
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn logout_clears_everything() {
        let plan = InvalidationPlan::from_mutations(&[MutationKind::LoggedOut]);
        assert!(plan.clear_all);
    }

    #[test]
    fn registration_dirties_nothing() {
        let plan = InvalidationPlan::from_mutations(&[MutationKind::Registered]);
        assert!(plan.is_empty());
    }

    #[test]
    fn non_terminal_status_change_leaves_balances_alone() {
        let group = Uuid::from_u128(1);
        let order = Uuid::from_u128(2);

        let plan = InvalidationPlan::from_mutations(&[MutationKind::OrderStatusChanged {
            group_id: group,
            order_id: order,
            new_status: OrderStatus::Confirmed,
        }]);

        assert!(plan.tags.contains(&ResourceTag::Order(order)));
        assert!(plan.tags.contains(&ResourceTag::OrderList(group)));
        assert!(plan.tags.contains(&ResourceTag::ActiveOrder(group)));
        assert!(!plan.tags.contains(&ResourceTag::BalanceList(group)));
        assert!(!plan.tags.contains(&ResourceTag::GroupAnalytics(group)));
    }

    #[test]
    fn finished_order_dirties_balances_and_analytics() {
        let group = Uuid::from_u128(1);
        let order = Uuid::from_u128(2);

        let plan = InvalidationPlan::from_mutations(&[MutationKind::OrderStatusChanged {
            group_id: group,
            order_id: order,
            new_status: OrderStatus::Finished,
        }]);

        assert!(plan.tags.contains(&ResourceTag::BalanceList(group)));
        assert!(plan.tags.contains(&ResourceTag::GroupAnalytics(group)));
        assert!(plan.tags.contains(&ResourceTag::UserAnalytics));
    }

    #[test]
    fn cancelled_order_dirties_only_order_tags() {
        let group = Uuid::from_u128(1);
        let order = Uuid::from_u128(2);

        let plan = InvalidationPlan::from_mutations(&[MutationKind::OrderStatusChanged {
            group_id: group,
            order_id: order,
            new_status: OrderStatus::Cancelled,
        }]);

        assert!(plan.tags.contains(&ResourceTag::Order(order)));
        assert!(!plan.tags.contains(&ResourceTag::BalanceList(group)));
    }

    #[test]
    fn item_edit_dirties_order_detail_and_active_view() {
        let group = Uuid::from_u128(1);
        let order = Uuid::from_u128(2);

        let plan = InvalidationPlan::from_mutations(&[MutationKind::OrderItemsChanged {
            group_id: group,
            order_id: order,
        }]);

        assert!(plan.tags.contains(&ResourceTag::OrderItemList(order)));
        assert!(plan.tags.contains(&ResourceTag::Order(order)));
        assert!(plan.tags.contains(&ResourceTag::ActiveOrder(group)));
    }

    #[test]
    fn batch_merges_duplicate_tags() {
        let group = Uuid::from_u128(1);

        let plan = InvalidationPlan::from_mutations(&[
            MutationKind::GroupUpdated { group_id: group },
            MutationKind::MembersChanged { group_id: group },
        ]);

        // Group(id) appears once despite both mutations naming it.
        assert!(plan.tags.contains(&ResourceTag::Group(group)));
        assert_eq!(plan.tags.len(), 3);
    }

    #[test]
    fn balance_adjustment_targets_list_and_history() {
        let group = Uuid::from_u128(1);
        let user = Uuid::from_u128(9);

        let plan = InvalidationPlan::from_mutations(&[MutationKind::BalanceAdjusted {
            group_id: group,
            user_id: user,
        }]);

        assert!(plan.tags.contains(&ResourceTag::BalanceList(group)));
        assert!(plan.tags.contains(&ResourceTag::BalanceHistory {
            group_id: group,
            user_id: user,
        }));
    }

    #[test]
    fn display_format() {
        let plan = InvalidationPlan::default();
        let display = format!("{plan}");
        assert!(display.contains("tags: 0"));
    }
}
