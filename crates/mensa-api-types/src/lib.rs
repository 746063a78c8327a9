//! Shared request and response types for the Mensa group lunch-ordering API.
//!
//! Every struct here mirrors the JSON the backend speaks: money fields are
//! [`rust_decimal::Decimal`] with two decimal places, timestamps are RFC 3339,
//! identifiers are UUIDs. The crate carries no transport logic so automation
//! clients can depend on it without pulling in an HTTP stack.

pub mod analytics;
pub mod balances;
pub mod common;
pub mod enums;
pub mod groups;
pub mod orders;
pub mod restaurants;
pub mod users;

pub use analytics::{GroupAnalytics, UserAnalytics};
pub use balances::{Balance, BalanceAdjustRequest, BalanceHistoryEntry};
pub use common::{ErrorBody, MessageResponse};
pub use enums::{
    AnalyticsScope, BalanceChangeType, BalancesScope, GroupRole, InvitationStatus, MembersScope,
    OrderStatus, OrdersScope, RestaurantsScope,
};
pub use groups::{
    Group, GroupCreateRequest, GroupDetail, GroupMember, GroupMemberCreateRequest,
    GroupMemberUpdateRequest, GroupUpdateRequest, Invitation, InvitationAcceptResponse,
    InvitationCreateRequest,
};
pub use orders::{
    FavoriteDish, Order, OrderCreateRequest, OrderDetail, OrderItem, OrderItemCreateRequest,
    OrderItemUpdateRequest, OrderStatusRequest, SetDeliveryFeeRequest,
};
pub use restaurants::{
    Dish, DishCreateRequest, DishUpdateRequest, Restaurant, RestaurantCreateRequest,
    RestaurantDetail, RestaurantUpdateRequest,
};
pub use users::{
    AdminUserUpdateRequest, LoginRequest, RegisterRequest, User, UserUpdateRequest,
};
