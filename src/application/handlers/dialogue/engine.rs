//! DialogueEngine - Runs one turn: load state, dispatch, commit, reply.
//!
//! Activities are routed through a table keyed by activity kind. Every
//! handler works on a copy of the session state; the copy is committed once
//! at the end of the turn and only if it changed. Any port failure discards
//! the copy and replies with a single apology text.

use futures::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::sync::Arc;

use super::error::TurnError;
use super::greeting::{self, GreetingLatch, GreetingPolicy};
use super::{add_to_cart, fallback, login, name_prompt, place_order, product_info, session_state};
use crate::config::{DialogueConfig, GreetingScope};
use crate::domain::classification::Intent;
use crate::domain::dialogue::{
    messages, Activity, ActivityKind, NoActionReason, TurnOutcome, TurnPhase, TurnTrace,
};
use crate::domain::session::SessionState;
use crate::ports::{CatalogLookup, DeliveryError, IntentClassifier, ReplySink, SessionStore};

/// What happened during one turn.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    /// Phase the turn finished in; always `Replied`.
    pub phase: TurnPhase,
    /// Top intent, when the utterance was classified.
    pub intent: Option<String>,
    pub confidence: Option<f64>,
    /// Whether changed session state was written back.
    pub state_committed: bool,
    /// Set when the sink refused the reply. Not retried.
    pub delivery_error: Option<DeliveryError>,
}

/// The turn in flight, as handlers see it.
struct Turn {
    activity: Activity,
    state: SessionState,
    trace: TurnTrace,
    intent: Option<String>,
    confidence: Option<f64>,
}

impl Turn {
    fn new(activity: &Activity) -> Self {
        Self {
            activity: activity.clone(),
            state: SessionState::default(),
            trace: TurnTrace::new(),
            intent: None,
            confidence: None,
        }
    }

    fn advance(&mut self, phase: TurnPhase) {
        if let Err(err) = self.trace.advance(phase) {
            tracing::warn!(error = %err, "unexpected turn phase transition");
        }
    }
}

type ActivityHandler =
    for<'a> fn(&'a DialogueEngine, &'a mut Turn) -> BoxFuture<'a, Result<TurnOutcome, TurnError>>;

/// Drives turns against the injected ports.
pub struct DialogueEngine {
    classifier: Arc<dyn IntentClassifier>,
    catalog: Arc<dyn CatalogLookup>,
    store: Arc<dyn SessionStore>,
    sink: Arc<dyn ReplySink>,
    config: DialogueConfig,
    greeting: GreetingPolicy,
    handlers: HashMap<ActivityKind, ActivityHandler>,
}

impl DialogueEngine {
    /// Creates an engine. With `GreetingScope::Process` the engine gets its own
    /// latch; use [`with_greeting_latch`](Self::with_greeting_latch) to share one.
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        catalog: Arc<dyn CatalogLookup>,
        store: Arc<dyn SessionStore>,
        sink: Arc<dyn ReplySink>,
        config: DialogueConfig,
    ) -> Self {
        let greeting = match config.greeting_scope {
            GreetingScope::Session => GreetingPolicy::PerConversation,
            GreetingScope::Process => GreetingPolicy::ProcessWide(GreetingLatch::new()),
        };

        let mut handlers: HashMap<ActivityKind, ActivityHandler> = HashMap::new();
        handlers.insert(ActivityKind::Message, dispatch_message);
        handlers.insert(ActivityKind::ConversationUpdate, dispatch_conversation_update);

        Self {
            classifier,
            catalog,
            store,
            sink,
            config,
            greeting,
            handlers,
        }
    }

    /// Greets once per process using `latch`, shared with other engines.
    pub fn with_greeting_latch(mut self, latch: GreetingLatch) -> Self {
        self.greeting = GreetingPolicy::ProcessWide(latch);
        self
    }

    /// Handles one activity end to end. Never fails: errors become the
    /// apology text and are reported in the logs.
    #[tracing::instrument(
        skip(self, activity),
        fields(conversation_id = %activity.conversation, kind = %activity.kind)
    )]
    pub async fn handle_turn(&self, activity: &Activity) -> TurnReport {
        let mut turn = Turn::new(activity);

        let (outcome, state_committed) = match self.run(&mut turn).await {
            Ok(done) => done,
            Err(err) => {
                tracing::warn!(error = %err, "turn failed, sending fallback reply");
                (TurnOutcome::say(messages::TRY_AGAIN), false)
            }
        };
        turn.advance(TurnPhase::Replied);

        let delivery_error = self.deliver(activity, &outcome).await;

        match &outcome {
            TurnOutcome::Replied(actions) => tracing::info!(
                intent = turn.intent.as_deref().unwrap_or("-"),
                confidence = turn.confidence.unwrap_or_default(),
                actions = actions.len(),
                state_committed,
                "turn handled"
            ),
            TurnOutcome::NoAction(reason) => tracing::info!(
                intent = turn.intent.as_deref().unwrap_or("-"),
                reason = %reason,
                state_committed,
                "turn handled without reply"
            ),
        }

        TurnReport {
            outcome,
            phase: turn.trace.phase(),
            intent: turn.intent,
            confidence: turn.confidence,
            state_committed,
            delivery_error,
        }
    }

    async fn run(&self, turn: &mut Turn) -> Result<(TurnOutcome, bool), TurnError> {
        let user = turn.activity.from.clone();
        let conversation = turn.activity.conversation.clone();

        let snapshot = session_state::load(self.store.as_ref(), &user, &conversation).await?;
        turn.state = snapshot.clone();

        let handler = self
            .handlers
            .get(&turn.activity.kind)
            .copied()
            .unwrap_or(dispatch_other as ActivityHandler);
        let outcome = handler(self, turn).await?;

        let committed = session_state::commit(
            self.store.as_ref(),
            &user,
            &conversation,
            &snapshot,
            &turn.state,
        )
        .await?;

        Ok((outcome, committed))
    }

    async fn deliver(&self, activity: &Activity, outcome: &TurnOutcome) -> Option<DeliveryError> {
        let actions = outcome.actions();
        if actions.is_empty() {
            return None;
        }

        match self.sink.send(activity, actions).await {
            Ok(()) => None,
            Err(err) => {
                tracing::error!(error = %err, actions = actions.len(), "reply delivery failed");
                Some(err)
            }
        }
    }

    async fn on_message(&self, turn: &mut Turn) -> Result<TurnOutcome, TurnError> {
        if self.config.collect_name {
            if let Some(outcome) = name_prompt::check(&turn.activity, &mut turn.state) {
                return Ok(outcome);
            }
        }

        let text = turn.activity.text_or_empty().to_string();
        let result = self.classifier.classify(&text).await?;
        turn.advance(TurnPhase::Classified);
        turn.intent = Some(result.top_intent.clone());
        turn.confidence = Some(result.confidence);

        turn.advance(TurnPhase::Dispatched);
        if !result.is_confident(self.config.confidence_threshold) {
            return Ok(fallback::respond(
                &text,
                &self.config.store_name,
                &self.config.intro_image_url,
            ));
        }

        let delay = self.config.reply_delay();
        let outcome = match result.intent() {
            Intent::Login => login::handle(self.catalog.as_ref(), &result, &mut turn.state).await?,
            Intent::ProductInfo => {
                product_info::handle(self.catalog.as_ref(), &result, delay).await?
            }
            Intent::AddToCart => {
                add_to_cart::handle(self.catalog.as_ref(), &result, &mut turn.state, delay).await?
            }
            Intent::PlaceOrder => place_order::handle(
                &mut turn.state,
                &self.config.store_name,
                self.config.tax_rate,
                delay,
            ),
            Intent::Unrecognized(name) => {
                TurnOutcome::NoAction(NoActionReason::UnrecognizedIntent(name))
            }
        };
        Ok(outcome)
    }

    async fn on_conversation_update(&self, turn: &mut Turn) -> Result<TurnOutcome, TurnError> {
        Ok(greeting::greet(
            &self.greeting,
            &self.config.store_name,
            &mut turn.state,
        ))
    }

    async fn on_other_activity(&self, turn: &mut Turn) -> Result<TurnOutcome, TurnError> {
        Ok(TurnOutcome::say(messages::activity_detected(&turn.activity.kind)))
    }
}

fn dispatch_message<'a>(
    engine: &'a DialogueEngine,
    turn: &'a mut Turn,
) -> BoxFuture<'a, Result<TurnOutcome, TurnError>> {
    engine.on_message(turn).boxed()
}

fn dispatch_conversation_update<'a>(
    engine: &'a DialogueEngine,
    turn: &'a mut Turn,
) -> BoxFuture<'a, Result<TurnOutcome, TurnError>> {
    engine.on_conversation_update(turn).boxed()
}

fn dispatch_other<'a>(
    engine: &'a DialogueEngine,
    turn: &'a mut Turn,
) -> BoxFuture<'a, Result<TurnOutcome, TurnError>> {
    engine.on_other_activity(turn).boxed()
}
