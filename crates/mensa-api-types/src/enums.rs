//! Wire enums: order lifecycle states, per-capability scopes, role presets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a group order.
///
/// Transitions are linear (`initiated → confirmed → ordered → finished`) with
/// `cancelled` reachable from any non-terminal state. The valid-edge table
/// itself lives in the client's domain layer; this type is only the wire
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Initiated,
    Confirmed,
    Ordered,
    Finished,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initiated => "initiated",
            Self::Confirmed => "confirmed",
            Self::Ordered => "ordered",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope for managing group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembersScope {
    Editor,
    Viewer,
    None,
}

/// Scope for orders within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdersScope {
    /// May edit any order and any item.
    Editor,
    /// May open orders and manage their own items.
    Initiator,
    /// May only add items to someone else's order.
    Participant,
}

/// Scope for balance reads and manual adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalancesScope {
    Editor,
    Viewer,
    None,
}

/// Scope for group analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsScope {
    Viewer,
    None,
}

/// Scope for restaurant and dish management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestaurantsScope {
    Editor,
    Viewer,
}

/// Role preset that seeds all five scopes at once when adding a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRole {
    Admin,
    SupervisorMember,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

/// Origin of a balance-ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceChangeType {
    /// Written when an order reaches `finished`.
    Order,
    /// Written by an explicit balance adjustment.
    Manual,
}
