//! Balance settlement arithmetic for finished orders.
//!
//! When an order reaches `finished`, each participant is debited their item
//! subtotal plus an equal share of the delivery fee, and the ledger gains one
//! entry per participant recording the signed delta and the balance it
//! produced. The backend owns the authoritative write; this module mirrors
//! the arithmetic so the client can render the per-participant breakdown and
//! verify what the server reports.

use std::collections::{BTreeMap, HashMap};

use mensa_api_types::OrderItem;
use rust_decimal::Decimal;
use uuid::Uuid;

/// One participant's slice of a settled order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantShare {
    pub user_id: Uuid,
    /// Σ price · quantity over the participant's items.
    pub subtotal: Decimal,
    /// Equal slice of the delivery/packing fee.
    pub fee_share: Decimal,
    /// Signed ledger delta: −(subtotal + fee_share).
    pub delta: Decimal,
    /// Running balance after applying the delta.
    pub balance_after: Decimal,
}

/// Predicted settlement of one order, ordered by participant id for stable
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub shares: Vec<ParticipantShare>,
    pub items_total: Decimal,
    pub fee_total: Decimal,
}

impl Settlement {
    pub fn participant_count(&self) -> usize {
        self.shares.len()
    }
}

/// Group items by participant and sum price · quantity per user.
pub fn subtotals_by_user(items: &[OrderItem]) -> BTreeMap<Uuid, Decimal> {
    let mut totals: BTreeMap<Uuid, Decimal> = BTreeMap::new();
    for item in items {
        let line = item.price * Decimal::from(item.quantity.max(1));
        *totals.entry(item.user_id).or_default() += line;
    }
    totals
}

/// Equal per-person slice of a total fee, rounded to cents (half-even, the
/// same rounding the backend applies).
pub fn per_person_fee(fee_total: Decimal, participants: usize) -> Decimal {
    if participants == 0 {
        return Decimal::ZERO;
    }
    (fee_total / Decimal::from(participants as u64)).round_dp(2)
}

/// Compute the full settlement for an order.
///
/// `prior_balances` supplies each participant's balance before the order;
/// missing entries start from zero. The returned shares chain: each
/// `balance_after` equals the prior balance plus the (negative) delta.
pub fn settle(
    items: &[OrderItem],
    fee_total: Option<Decimal>,
    prior_balances: &HashMap<Uuid, Decimal>,
) -> Settlement {
    let subtotals = subtotals_by_user(items);
    let fee_total = fee_total.unwrap_or_default();
    let fee_share = per_person_fee(fee_total, subtotals.len());

    let mut items_total = Decimal::ZERO;
    let shares = subtotals
        .into_iter()
        .map(|(user_id, subtotal)| {
            items_total += subtotal;
            let delta = -(subtotal + fee_share);
            let prior = prior_balances.get(&user_id).copied().unwrap_or_default();
            ParticipantShare {
                user_id,
                subtotal,
                fee_share,
                delta,
                balance_after: prior + delta,
            }
        })
        .collect();

    Settlement {
        shares,
        items_total,
        fee_total,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use time::OffsetDateTime;

    use super::*;

    fn uid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn item(user: Uuid, price: Decimal, quantity: u32) -> OrderItem {
        OrderItem {
            id: Uuid::new_v4(),
            order_id: Uuid::nil(),
            user_id: user,
            name: "item".to_string(),
            detail: None,
            price,
            quantity,
            dish_id: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
            user_full_name: None,
        }
    }

    #[test]
    fn two_participants_with_six_unit_fee() {
        // A: $10 of items, B: $20 of items, $6 delivery total → $3 each.
        let a = uid(1);
        let b = uid(2);
        let items = vec![
            item(a, dec!(10.00), 1),
            item(b, dec!(12.00), 1),
            item(b, dec!(8.00), 1),
        ];

        let settlement = settle(&items, Some(dec!(6.00)), &HashMap::new());

        assert_eq!(settlement.participant_count(), 2);
        assert_eq!(settlement.items_total, dec!(30.00));
        assert_eq!(settlement.shares[0].user_id, a);
        assert_eq!(settlement.shares[0].delta, dec!(-13.00));
        assert_eq!(settlement.shares[0].balance_after, dec!(-13.00));
        assert_eq!(settlement.shares[1].user_id, b);
        assert_eq!(settlement.shares[1].delta, dec!(-23.00));
        assert_eq!(settlement.shares[1].balance_after, dec!(-23.00));
    }

    #[test]
    fn balance_after_chains_from_prior_balance() {
        let a = uid(1);
        let items = vec![item(a, dec!(7.50), 2)];
        let prior = HashMap::from([(a, dec!(20.00))]);

        let settlement = settle(&items, None, &prior);

        // 2 × 7.50 = 15.00, no fee.
        assert_eq!(settlement.shares[0].subtotal, dec!(15.00));
        assert_eq!(settlement.shares[0].fee_share, Decimal::ZERO);
        assert_eq!(settlement.shares[0].balance_after, dec!(5.00));
    }

    #[test]
    fn quantity_multiplies_price() {
        let a = uid(1);
        let totals = subtotals_by_user(&[item(a, dec!(3.25), 3)]);
        assert_eq!(totals[&a], dec!(9.75));
    }

    #[test]
    fn fee_share_rounds_to_cents_half_even() {
        // 10.00 across 3 participants: 3.3333… → 3.33.
        assert_eq!(per_person_fee(dec!(10.00), 3), dec!(3.33));
        // 0.05 across 2: 0.025 rounds half-even to 0.02.
        assert_eq!(per_person_fee(dec!(0.05), 2), dec!(0.02));
        assert_eq!(per_person_fee(dec!(6.00), 0), Decimal::ZERO);
    }

    #[test]
    fn empty_order_settles_to_nothing() {
        let settlement = settle(&[], Some(dec!(6.00)), &HashMap::new());
        assert!(settlement.shares.is_empty());
        assert_eq!(settlement.items_total, Decimal::ZERO);
    }

    #[test]
    fn zero_quantity_counts_as_one() {
        // Legacy rows predating the quantity column deserialize as 0 in some
        // fixtures; treat them as a single unit like the backend does.
        let a = uid(1);
        let totals = subtotals_by_user(&[item(a, dec!(4.00), 0)]);
        assert_eq!(totals[&a], dec!(4.00));
    }

    #[test]
    fn stable_participant_order() {
        let items = vec![
            item(uid(9), dec!(1.00), 1),
            item(uid(3), dec!(1.00), 1),
            item(uid(6), dec!(1.00), 1),
        ];
        let settlement = settle(&items, None, &HashMap::new());
        let ids: Vec<_> = settlement.shares.iter().map(|s| s.user_id).collect();
        assert_eq!(ids, vec![uid(3), uid(6), uid(9)]);
    }
}
