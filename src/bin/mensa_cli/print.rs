#![deny(clippy::all, clippy::pedantic)]

use mensa::domain::settlement::Settlement;
use serde::Serialize;

use crate::CliError;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Output(format!("failed to render output: {e}")))?;
    println!("{out}");
    Ok(())
}

/// Render a settlement preview as a table: one row per participant, with
/// the totals underneath.
pub fn print_settlement(settlement: &Settlement) {
    println!(
        "{:<38} {:>10} {:>10} {:>10} {:>12}",
        "participant", "subtotal", "fee", "delta", "balance"
    );
    for share in &settlement.shares {
        println!(
            "{:<38} {:>10} {:>10} {:>10} {:>12}",
            share.user_id, share.subtotal, share.fee_share, share.delta, share.balance_after
        );
    }
    println!(
        "items total: {}  fee total: {}  participants: {}",
        settlement.items_total,
        settlement.fee_total,
        settlement.participant_count()
    );
}
