//! Login: identify the customer by email.

use crate::domain::classification::{first_entity, ClassificationResult, EntityLabel};
use crate::domain::dialogue::{messages, replies, ReplyAction, TurnOutcome};
use crate::domain::session::SessionState;
use crate::ports::{CatalogLookup, LookupError};

/// Only the first entity is looked at; an email further down is ignored.
pub async fn handle(
    catalog: &dyn CatalogLookup,
    result: &ClassificationResult,
    state: &mut SessionState,
) -> Result<TurnOutcome, LookupError> {
    let email = match first_entity(&result.entities) {
        Some(entity) if entity.is(&EntityLabel::Email) => entity.raw_text.as_str(),
        _ => return Ok(TurnOutcome::say(messages::ASK_EMAIL)),
    };

    match catalog.customer_by_email(email).await? {
        Some(customer) => {
            tracing::info!(customer_id = ?customer.customer_id, "customer logged in");
            state.customer.adopt(customer);
            Ok(TurnOutcome::Replied(vec![ReplyAction::card(
                replies::welcome_card(&state.customer),
            )]))
        }
        None => Ok(TurnOutcome::say(messages::USER_NOT_FOUND)),
    }
}
