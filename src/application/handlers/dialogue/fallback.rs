//! Handling for utterances the classifier was not confident about.

use crate::domain::dialogue::{messages, replies, ReplyAction, TurnOutcome};

/// `help` (any case) gets the introduction card, anything else an apology.
pub fn respond(text: &str, store_name: &str, intro_image_url: &str) -> TurnOutcome {
    if text.to_lowercase() == messages::HELP_KEYWORD {
        return TurnOutcome::Replied(vec![ReplyAction::card(replies::intro_card(
            store_name,
            intro_image_url,
        ))]);
    }
    TurnOutcome::say(messages::NOT_UNDERSTOOD)
}
