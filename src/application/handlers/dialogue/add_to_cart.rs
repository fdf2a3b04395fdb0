//! AddToCart: append one product to the cart by id.

use std::time::Duration;

use crate::domain::catalog::ProductId;
use crate::domain::classification::{first_entity, ClassificationResult, EntityLabel};
use crate::domain::dialogue::{messages, NoActionReason, ReplyAction, TurnOutcome};
use crate::domain::session::{CartLine, SessionState};
use crate::ports::{CatalogLookup, LookupError};

/// The first entity must be a number naming the product.
pub async fn handle(
    catalog: &dyn CatalogLookup,
    result: &ClassificationResult,
    state: &mut SessionState,
    reply_delay: Duration,
) -> Result<TurnOutcome, LookupError> {
    let product_id = match first_entity(&result.entities) {
        Some(entity) if entity.is(&EntityLabel::Number) => entity.raw_text.parse::<ProductId>(),
        _ => return Ok(TurnOutcome::NoAction(NoActionReason::NoProductNumber)),
    };
    let Ok(product_id) = product_id else {
        return Ok(TurnOutcome::NoAction(NoActionReason::NoProductNumber));
    };

    let Some(product) = catalog.product_by_id(product_id).await? else {
        return Ok(TurnOutcome::say(messages::product_not_found(product_id)));
    };

    state
        .cart
        .add(CartLine::for_product(state.customer.customer_id, &product));
    tracing::debug!(product_id = %product_id, cart_lines = state.cart.len(), "added to cart");

    Ok(TurnOutcome::Replied(vec![
        ReplyAction::Typing,
        ReplyAction::delay(reply_delay),
        ReplyAction::text(messages::added_to_cart(&product.name)),
        ReplyAction::text(messages::WHAT_ELSE),
    ]))
}
