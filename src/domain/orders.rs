//! Order lifecycle rules.
//!
//! The status machine is linear with one escape hatch:
//!
//! ```text
//! initiated → confirmed → ordered → finished
//!     └──────────┴──────────┴→ cancelled
//! ```
//!
//! The backend enforces the same table; validating here lets callers reject
//! impossible transitions before spending a network round trip.

use mensa_api_types::{OrderStatus, OrdersScope};

use super::error::DomainError;

/// Statuses reachable from `from` in a single transition.
pub fn allowed_transitions(from: OrderStatus) -> &'static [OrderStatus] {
    match from {
        OrderStatus::Initiated => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
        OrderStatus::Confirmed => &[OrderStatus::Ordered, OrderStatus::Cancelled],
        OrderStatus::Ordered => &[OrderStatus::Finished, OrderStatus::Cancelled],
        OrderStatus::Finished | OrderStatus::Cancelled => &[],
    }
}

/// Validate a single status transition against the directed-edge table.
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), DomainError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(DomainError::transition(from, to))
    }
}

/// Whether `user` may change the status of an order at all: the initiator,
/// an orders editor, or a platform admin.
pub fn may_transition(is_initiator: bool, scope: OrdersScope, is_admin: bool) -> bool {
    is_initiator || scope == OrdersScope::Editor || is_admin
}

/// Item-edit policy: items are always editable while the order is
/// `initiated`; once `confirmed` only the initiator or an orders editor may
/// still touch them; afterwards items are frozen.
pub fn items_editable(status: OrderStatus, is_initiator: bool, scope: OrdersScope) -> bool {
    match status {
        OrderStatus::Initiated => true,
        OrderStatus::Confirmed => is_initiator || scope == OrdersScope::Editor,
        OrderStatus::Ordered | OrderStatus::Finished | OrderStatus::Cancelled => false,
    }
}

/// Delivery fees may only change while the order is still in flight.
pub fn delivery_fee_editable(status: OrderStatus) -> bool {
    !status.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [OrderStatus; 5] = [
        OrderStatus::Initiated,
        OrderStatus::Confirmed,
        OrderStatus::Ordered,
        OrderStatus::Finished,
        OrderStatus::Cancelled,
    ];

    #[test]
    fn happy_path_is_accepted() {
        assert!(check_transition(OrderStatus::Initiated, OrderStatus::Confirmed).is_ok());
        assert!(check_transition(OrderStatus::Confirmed, OrderStatus::Ordered).is_ok());
        assert!(check_transition(OrderStatus::Ordered, OrderStatus::Finished).is_ok());
    }

    #[test]
    fn cancel_is_reachable_from_every_non_terminal_state() {
        for from in [
            OrderStatus::Initiated,
            OrderStatus::Confirmed,
            OrderStatus::Ordered,
        ] {
            assert!(check_transition(from, OrderStatus::Cancelled).is_ok());
        }
    }

    #[test]
    fn terminal_states_accept_nothing() {
        for to in ALL {
            assert!(check_transition(OrderStatus::Finished, to).is_err());
            assert!(check_transition(OrderStatus::Cancelled, to).is_err());
        }
    }

    #[test]
    fn only_directed_edges_are_accepted() {
        // Exhaustive: exactly seven edges exist in the whole graph.
        let mut accepted = 0;
        for from in ALL {
            for to in ALL {
                if check_transition(from, to).is_ok() {
                    accepted += 1;
                }
            }
        }
        assert_eq!(accepted, 7);
    }

    #[test]
    fn no_skipping_states() {
        assert!(check_transition(OrderStatus::Initiated, OrderStatus::Ordered).is_err());
        assert!(check_transition(OrderStatus::Initiated, OrderStatus::Finished).is_err());
        assert!(check_transition(OrderStatus::Confirmed, OrderStatus::Finished).is_err());
        // No walking backwards either.
        assert!(check_transition(OrderStatus::Ordered, OrderStatus::Confirmed).is_err());
    }

    #[test]
    fn item_edit_policy() {
        for scope in [
            OrdersScope::Editor,
            OrdersScope::Initiator,
            OrdersScope::Participant,
        ] {
            assert!(items_editable(OrderStatus::Initiated, false, scope));
            assert!(!items_editable(OrderStatus::Ordered, true, scope));
            assert!(!items_editable(OrderStatus::Finished, true, scope));
        }
        assert!(items_editable(
            OrderStatus::Confirmed,
            true,
            OrdersScope::Participant
        ));
        assert!(items_editable(
            OrderStatus::Confirmed,
            false,
            OrdersScope::Editor
        ));
        assert!(!items_editable(
            OrderStatus::Confirmed,
            false,
            OrdersScope::Participant
        ));
    }

    #[test]
    fn transition_permission() {
        assert!(may_transition(true, OrdersScope::Participant, false));
        assert!(may_transition(false, OrdersScope::Editor, false));
        assert!(may_transition(false, OrdersScope::Participant, true));
        assert!(!may_transition(false, OrdersScope::Initiator, false));
    }
}
