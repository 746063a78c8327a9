//! API path construction.
//!
//! Paths are relative to the configured base URL, which always ends in a
//! trailing slash so `Url::join` keeps the base path intact.

use uuid::Uuid;

pub fn login() -> &'static str {
    "auth/login"
}

pub fn register() -> &'static str {
    "auth/register"
}

pub fn logout() -> &'static str {
    "auth/logout"
}

pub fn me() -> &'static str {
    "auth/me"
}

pub fn users() -> &'static str {
    "users"
}

pub fn user(user_id: Uuid) -> String {
    format!("users/{user_id}")
}

pub fn user_analytics() -> &'static str {
    "users/me/analytics"
}

pub fn groups() -> &'static str {
    "groups"
}

pub fn group(group_id: Uuid) -> String {
    format!("groups/{group_id}")
}

pub fn group_members(group_id: Uuid) -> String {
    format!("groups/{group_id}/members")
}

pub fn group_member(group_id: Uuid, user_id: Uuid) -> String {
    format!("groups/{group_id}/members/{user_id}")
}

pub fn group_invitations(group_id: Uuid) -> String {
    format!("groups/{group_id}/invitations")
}

pub fn invitation_accept(token: &str) -> String {
    format!("invitations/{token}/accept")
}

pub fn invitation_decline(token: &str) -> String {
    format!("invitations/{token}/decline")
}

pub fn group_analytics(group_id: Uuid) -> String {
    format!("groups/{group_id}/analytics")
}

pub fn restaurants(group_id: Uuid) -> String {
    format!("groups/{group_id}/restaurants")
}

pub fn restaurant(group_id: Uuid, restaurant_id: Uuid) -> String {
    format!("groups/{group_id}/restaurants/{restaurant_id}")
}

pub fn dishes(group_id: Uuid, restaurant_id: Uuid) -> String {
    format!("groups/{group_id}/restaurants/{restaurant_id}/dishes")
}

pub fn dish(group_id: Uuid, restaurant_id: Uuid, dish_id: Uuid) -> String {
    format!("groups/{group_id}/restaurants/{restaurant_id}/dishes/{dish_id}")
}

pub fn orders(group_id: Uuid) -> String {
    format!("groups/{group_id}/orders")
}

pub fn active_order(group_id: Uuid) -> String {
    format!("groups/{group_id}/orders/active")
}

pub fn order(group_id: Uuid, order_id: Uuid) -> String {
    format!("groups/{group_id}/orders/{order_id}")
}

pub fn order_status(group_id: Uuid, order_id: Uuid) -> String {
    format!("groups/{group_id}/orders/{order_id}/status")
}

pub fn order_delivery_fee(group_id: Uuid, order_id: Uuid) -> String {
    format!("groups/{group_id}/orders/{order_id}/delivery-fee")
}

pub fn order_items(group_id: Uuid, order_id: Uuid) -> String {
    format!("groups/{group_id}/orders/{order_id}/items")
}

pub fn order_item(group_id: Uuid, order_id: Uuid, item_id: Uuid) -> String {
    format!("groups/{group_id}/orders/{order_id}/items/{item_id}")
}

pub fn favorites(group_id: Uuid, restaurant_id: Uuid) -> String {
    format!("groups/{group_id}/restaurants/{restaurant_id}/favorites")
}

pub fn balances(group_id: Uuid) -> String {
    format!("groups/{group_id}/balances")
}

pub fn my_balance(group_id: Uuid) -> String {
    format!("groups/{group_id}/balances/me")
}

pub fn balance_adjust(group_id: Uuid) -> String {
    format!("groups/{group_id}/balances/adjust")
}

pub fn balance_history(group_id: Uuid, user_id: Uuid) -> String {
    format!("groups/{group_id}/balances/{user_id}/history")
}

/// Whether a path belongs to the auth surface. A 401 from here means the
/// credentials were wrong, not that the session expired.
pub fn is_auth_path(path: &str) -> bool {
    path.starts_with("auth/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths() {
        let g = Uuid::from_u128(1);
        let o = Uuid::from_u128(2);
        assert_eq!(
            order_status(g, o),
            format!("groups/{g}/orders/{o}/status")
        );
        assert_eq!(active_order(g), format!("groups/{g}/orders/active"));
    }

    #[test]
    fn auth_path_detection() {
        assert!(is_auth_path(login()));
        assert!(is_auth_path(me()));
        assert!(!is_auth_path(groups()));
        assert!(!is_auth_path(&balances(Uuid::from_u128(1))));
    }
}
