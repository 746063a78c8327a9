//! Per-capability permission scopes.
//!
//! Authorization is scope-based: every member carries one scope per
//! capability, and role presets are just shorthand that seeds all five at
//! once. The `is_admin` flag on [`mensa_api_types::User`] bypasses scope
//! checks entirely (platform operators).

use mensa_api_types::{
    AnalyticsScope, BalancesScope, GroupMember, GroupRole, MembersScope, OrdersScope,
    RestaurantsScope,
};

/// The five capability scopes of one member, detached from the wire record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeSet {
    pub members: MembersScope,
    pub orders: OrdersScope,
    pub balances: BalancesScope,
    pub analytics: AnalyticsScope,
    pub restaurants: RestaurantsScope,
}

impl ScopeSet {
    /// The scopes a role preset expands to when a member is added.
    pub fn from_role(role: GroupRole) -> Self {
        match role {
            GroupRole::Admin => Self {
                members: MembersScope::Editor,
                orders: OrdersScope::Editor,
                balances: BalancesScope::Editor,
                analytics: AnalyticsScope::Viewer,
                restaurants: RestaurantsScope::Editor,
            },
            GroupRole::SupervisorMember => Self {
                members: MembersScope::Viewer,
                orders: OrdersScope::Initiator,
                balances: BalancesScope::Viewer,
                analytics: AnalyticsScope::Viewer,
                restaurants: RestaurantsScope::Viewer,
            },
            GroupRole::Member => Self {
                members: MembersScope::None,
                orders: OrdersScope::Participant,
                balances: BalancesScope::None,
                analytics: AnalyticsScope::None,
                restaurants: RestaurantsScope::Viewer,
            },
        }
    }

    pub fn can_manage_members(&self) -> bool {
        self.members == MembersScope::Editor
    }

    pub fn can_view_members(&self) -> bool {
        matches!(self.members, MembersScope::Editor | MembersScope::Viewer)
    }

    pub fn can_initiate_orders(&self) -> bool {
        matches!(self.orders, OrdersScope::Editor | OrdersScope::Initiator)
    }

    pub fn can_view_balances(&self) -> bool {
        matches!(self.balances, BalancesScope::Editor | BalancesScope::Viewer)
    }

    pub fn can_adjust_balances(&self) -> bool {
        self.balances == BalancesScope::Editor
    }

    pub fn can_view_analytics(&self) -> bool {
        self.analytics == AnalyticsScope::Viewer
    }

    pub fn can_edit_restaurants(&self) -> bool {
        self.restaurants == RestaurantsScope::Editor
    }
}

impl From<&GroupMember> for ScopeSet {
    fn from(member: &GroupMember) -> Self {
        Self {
            members: member.members_scope,
            orders: member.orders_scope,
            balances: member.balances_scope,
            analytics: member.analytics_scope,
            restaurants: member.restaurants_scope,
        }
    }
}
