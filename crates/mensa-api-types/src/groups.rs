//! Group, membership, and invitation payloads.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::enums::{
    AnalyticsScope, BalancesScope, GroupRole, InvitationStatus, MembersScope, OrdersScope,
    RestaurantsScope,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub logo_path: Option<String>,
    pub owner_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Present on list responses, absent elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDetail {
    #[serde(flatten)]
    pub group: Group,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// Per-member permission record; one scope per capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: Uuid,
    pub user_id: Uuid,
    pub group_id: Uuid,
    pub members_scope: MembersScope,
    pub orders_scope: OrdersScope,
    pub balances_scope: BalancesScope,
    pub analytics_scope: AnalyticsScope,
    pub restaurants_scope: RestaurantsScope,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Add a member with a role preset; individual scopes may override the preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMemberCreateRequest {
    pub user_id: Uuid,
    pub role: GroupRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_scope: Option<MembersScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_scope: Option<OrdersScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances_scope: Option<BalancesScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_scope: Option<AnalyticsScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants_scope: Option<RestaurantsScope>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupMemberUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<GroupRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_scope: Option<MembersScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_scope: Option<OrdersScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances_scope: Option<BalancesScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_scope: Option<AnalyticsScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants_scope: Option<RestaurantsScope>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Uuid,
    pub group_id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_email: String,
    pub invitee_id: Option<Uuid>,
    pub status: InvitationStatus,
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationCreateRequest {
    pub email: String,
    pub role: GroupRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationAcceptResponse {
    pub message: String,
    pub group_id: Uuid,
}
