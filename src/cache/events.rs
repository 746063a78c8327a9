//! Mutation descriptions.
//!
//! Every write the client performs is described by a [`MutationKind`]; the
//! planner turns a batch of them into the set of tags to dirty.

use mensa_api_types::OrderStatus;
use uuid::Uuid;

/// A committed write, described with just enough context to compute the
/// tags it dirties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    // Session
    LoggedIn,
    LoggedOut,
    Registered,
    ProfileUpdated { user_id: Uuid },
    UserAdministered { user_id: Uuid },

    // Groups
    GroupCreated,
    GroupUpdated { group_id: Uuid },
    GroupDeleted { group_id: Uuid },
    MembersChanged { group_id: Uuid },
    InvitationsChanged { group_id: Uuid },
    /// The current user accepted or declined an invitation, which can change
    /// their own group membership.
    InvitationAnswered,

    // Restaurants
    RestaurantCreated { group_id: Uuid },
    RestaurantUpdated { group_id: Uuid, restaurant_id: Uuid },
    RestaurantDeleted { group_id: Uuid, restaurant_id: Uuid },
    DishesChanged { restaurant_id: Uuid },

    // Orders
    OrderCreated { group_id: Uuid },
    OrderStatusChanged {
        group_id: Uuid,
        order_id: Uuid,
        new_status: OrderStatus,
    },
    DeliveryFeeSet { group_id: Uuid, order_id: Uuid },
    OrderItemsChanged { group_id: Uuid, order_id: Uuid },
    FavoriteToggled { group_id: Uuid, restaurant_id: Uuid },

    // Balances
    BalanceAdjusted { group_id: Uuid, user_id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_equality_includes_context() {
        let group = Uuid::from_u128(1);
        let order = Uuid::from_u128(2);

        let a = MutationKind::OrderStatusChanged {
            group_id: group,
            order_id: order,
            new_status: OrderStatus::Confirmed,
        };
        let b = MutationKind::OrderStatusChanged {
            group_id: group,
            order_id: order,
            new_status: OrderStatus::Finished,
        };
        assert_ne!(a, b);
    }
}
