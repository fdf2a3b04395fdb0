//! Console reply sink.
//!
//! Writes one JSON object per reply action:
//! `{"conversation":"...","action":{"type":"text","text":"..."}}`.
//! Delay actions are honoured by sleeping unless delays are disabled.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use crate::domain::dialogue::{Activity, ReplyAction};
use crate::ports::{DeliveryError, ReplySink};

#[derive(Serialize)]
struct ConsoleLine<'a> {
    conversation: &'a str,
    action: &'a ReplyAction,
}

pub struct ConsoleSink<W = Stdout> {
    out: Mutex<W>,
    honor_delays: bool,
}

impl ConsoleSink<Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> ConsoleSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            honor_delays: true,
        }
    }

    /// Skip the pauses that delay actions ask for.
    pub fn without_delays(mut self) -> Self {
        self.honor_delays = false;
        self
    }

    /// Gives back the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W> ReplySink for ConsoleSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&self, activity: &Activity, actions: &[ReplyAction]) -> Result<(), DeliveryError> {
        let mut out = self.out.lock().await;

        for action in actions {
            if let ReplyAction::Delay { ms } = action {
                if self.honor_delays {
                    out.flush().await.map_err(|e| DeliveryError::Io(e.to_string()))?;
                    tokio::time::sleep(Duration::from_millis(*ms)).await;
                }
                continue;
            }

            let line = ConsoleLine {
                conversation: activity.conversation.as_str(),
                action,
            };
            let mut json = serde_json::to_vec(&line)
                .map_err(|e| DeliveryError::Channel(e.to_string()))?;
            json.push(b'\n');
            out.write_all(&json)
                .await
                .map_err(|e| DeliveryError::Io(e.to_string()))?;
        }

        out.flush().await.map_err(|e| DeliveryError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConversationId, UserId};

    #[tokio::test]
    async fn writes_one_json_line_per_action() {
        let sink = ConsoleSink::new(Vec::<u8>::new()).without_delays();
        let activity = Activity::message(
            UserId::new("u").unwrap(),
            ConversationId::new("conv-1").unwrap(),
            "hi",
        );

        sink.send(
            &activity,
            &[
                ReplyAction::Typing,
                ReplyAction::delay(Duration::from_millis(5000)),
                ReplyAction::text("hello"),
            ],
        )
        .await
        .unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["conversation"], "conv-1");
        assert_eq!(last["action"]["type"], "text");
        assert_eq!(last["action"]["text"], "hello");
    }
}
