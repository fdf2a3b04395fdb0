//! PlaceOrder: turn the cart into a receipt.

use rust_decimal::Decimal;
use std::time::Duration;

use crate::domain::dialogue::{
    messages, replies, NoActionReason, ReceiptTotals, ReplyAction, TurnOutcome,
};
use crate::domain::session::SessionState;

/// Empties the cart into a receipt. An empty cart gets no reply at all.
pub fn handle(
    state: &mut SessionState,
    store_name: &str,
    tax_rate: Decimal,
    reply_delay: Duration,
) -> TurnOutcome {
    if state.cart.is_empty() {
        return TurnOutcome::NoAction(NoActionReason::EmptyCart);
    }

    let lines = state.cart.checkout();
    let totals = ReceiptTotals::compute(lines.iter().map(|line| line.list_price), tax_rate);
    tracing::info!(
        lines = lines.len(),
        total = %totals.total,
        "order placed"
    );

    TurnOutcome::Replied(vec![
        ReplyAction::Typing,
        ReplyAction::delay(reply_delay),
        ReplyAction::text(messages::RECEIPT_INTRO),
        ReplyAction::card(replies::receipt_card(
            store_name,
            &state.customer,
            &lines,
            &totals,
        )),
        ReplyAction::text(messages::WHAT_ELSE),
    ])
}
