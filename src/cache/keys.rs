//! Cache key definitions.
//!
//! [`QueryKey`] identifies one cached read; [`ResourceTag`] identifies an
//! invalidation target. A query registers the tags it depends on, and a
//! mutation names the tags it dirties; the registry connects the two.

use uuid::Uuid;

/// Identity of a cached read. One variant per remote query the client issues.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    // Session
    CurrentUser,

    // Users
    UserList,
    UserAnalytics,

    // Groups
    GroupList,
    Group(Uuid),
    MemberList(Uuid),
    InvitationList(Uuid),
    GroupAnalytics(Uuid),

    // Restaurants (restaurants are group-owned, dishes restaurant-owned)
    RestaurantList(Uuid),
    Restaurant(Uuid),
    DishList(Uuid),

    // Orders
    OrderList(Uuid),
    ActiveOrder(Uuid),
    Order(Uuid),
    OrderItemList(Uuid),
    FavoriteList { group_id: Uuid, restaurant_id: Uuid },

    // Balances
    BalanceList(Uuid),
    MyBalance(Uuid),
    BalanceHistory { group_id: Uuid, user_id: Uuid },
}

/// Invalidation tag with list/item granularity: a list tag dirties whenever
/// collection membership could have changed, an item tag on direct update of
/// that one entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceTag {
    /// The authenticated identity (`auth/me`).
    Auth,
    UserList,
    User(Uuid),
    UserAnalytics,

    GroupList,
    Group(Uuid),
    MemberList(Uuid),
    InvitationList(Uuid),
    GroupAnalytics(Uuid),

    RestaurantList(Uuid),
    Restaurant(Uuid),
    DishList(Uuid),

    OrderList(Uuid),
    ActiveOrder(Uuid),
    Order(Uuid),
    OrderItemList(Uuid),
    FavoriteList { group_id: Uuid, restaurant_id: Uuid },

    BalanceList(Uuid),
    BalanceHistory { group_id: Uuid, user_id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_key_equality() {
        let group = Uuid::from_u128(7);
        assert_eq!(QueryKey::OrderList(group), QueryKey::OrderList(group));
        assert_ne!(
            QueryKey::OrderList(group),
            QueryKey::OrderList(Uuid::from_u128(8))
        );
        assert_ne!(QueryKey::OrderList(group), QueryKey::BalanceList(group));
    }

    #[test]
    fn list_and_item_tags_are_distinct() {
        let id = Uuid::from_u128(1);
        assert_ne!(ResourceTag::Order(id), ResourceTag::OrderList(id));
        assert_ne!(ResourceTag::Group(id), ResourceTag::GroupList);
    }
}
