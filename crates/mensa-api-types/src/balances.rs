//! Balance and ledger payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::enums::BalanceChangeType;

/// Running balance of one member within one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub group_id: Uuid,
    pub amount: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_full_name: Option<String>,
}

/// Append-only ledger entry: the signed delta and the balance it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceHistoryEntry {
    pub id: Uuid,
    pub balance_id: Uuid,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub note: Option<String>,
    pub change_type: BalanceChangeType,
    pub order_id: Option<Uuid>,
    pub created_by_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
}

/// Manual correction applied by a balances editor (top-up or write-off).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceAdjustRequest {
    pub user_id: Uuid,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
