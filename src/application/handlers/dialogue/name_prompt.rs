//! Asks for the user's name before anything else.

use crate::domain::dialogue::{messages, Activity, TurnOutcome};
use crate::domain::foundation::Timestamp;
use crate::domain::session::SessionState;

/// Runs ahead of classification.
///
/// Returns a reply while the name is still being collected. Once a name is
/// known it only records when and where the message came from and returns
/// `None` so the turn carries on.
pub fn check(activity: &Activity, state: &mut SessionState) -> Option<TurnOutcome> {
    if state.customer.has_name() {
        let timestamp = activity.timestamp.unwrap_or_else(Timestamp::now);
        state.progress.record_message(timestamp, activity.channel_id.clone());
        return None;
    }

    if state.progress.awaiting_name {
        let name = activity.text_or_empty().trim().to_string();
        let reply = messages::thanks(&name);
        state.accept_name(name);
        return Some(TurnOutcome::say(reply));
    }

    state.prompt_for_name();
    Some(TurnOutcome::say(messages::ASK_NAME))
}
