//! Console host for the retail assistant.
//!
//! Opens one conversation, sends the conversation-start activity, then
//! treats every stdin line as a chat message. Replies are printed to stdout
//! as JSON lines; logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use retail_assistant::adapters::{
    ConsoleSink, FileSessionStore, InMemorySessionStore, LuisClassifier, LuisConfig,
    PostgresCatalogReader,
};
use retail_assistant::application::DialogueEngine;
use retail_assistant::config::{AppConfig, LogFormat, RuntimeConfig, StorageBackend};
use retail_assistant::domain::dialogue::Activity;
use retail_assistant::domain::foundation::{ConversationId, UserId};
use retail_assistant::ports::SessionStore;
use secrecy::ExposeSecret;

const CHANNEL_ID: &str = "console";

fn init_tracing(runtime: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&runtime.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match runtime.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.runtime);

    tracing::info!(
        environment = ?config.runtime.environment,
        storage = ?config.storage.backend,
        catalog = %config.database.redacted_url(),
        "retail assistant starting"
    );

    let subscription_key = config
        .classifier
        .subscription_key
        .as_ref()
        .map(|key| key.expose_secret().clone())
        .unwrap_or_default();
    let classifier = LuisClassifier::new(
        LuisConfig::new(
            config.classifier.endpoint.clone(),
            config.classifier.app_id.clone(),
            subscription_key,
        )
        .with_timeout(config.classifier.timeout())
        .with_staging(config.classifier.staging),
    )?;

    let pool = config.database.pool_options().connect_lazy(&config.database.url)?;
    let catalog = PostgresCatalogReader::new(pool);

    let store: Arc<dyn SessionStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemorySessionStore::new()),
        StorageBackend::File => Arc::new(FileSessionStore::new(&config.storage.path)),
    };

    let engine = DialogueEngine::new(
        Arc::new(classifier),
        Arc::new(catalog),
        store,
        Arc::new(ConsoleSink::stdout()),
        config.dialogue.clone(),
    );

    let user = UserId::new(std::env::var("USER").unwrap_or_else(|_| "console-user".to_string()))?;
    let conversation = ConversationId::new(Uuid::new_v4().to_string())?;

    let start = Activity::conversation_update(user.clone(), conversation.clone())
        .with_channel(CHANNEL_ID);
    engine.handle_turn(&start).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let activity = Activity::message(user.clone(), conversation.clone(), line)
            .with_channel(CHANNEL_ID);
        engine.handle_turn(&activity).await;
    }

    tracing::info!("input closed, shutting down");
    Ok(())
}
