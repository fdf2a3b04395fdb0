//! Settings for the assistant, read from `RETAIL_ASSISTANT__*` variables.
//!
//! A `.env` file in the working directory is honoured during development.
//! Nested sections are separated by a double underscore, so
//! `RETAIL_ASSISTANT__DIALOGUE__TAX_RATE=0.08` sets `dialogue.tax_rate`.
//!
//! ```no_run
//! use retail_assistant::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("Greeting as {}", config.dialogue.store_name);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod classifier;
mod database;
mod dialogue;
mod error;
mod runtime;
mod storage;

pub use classifier::ClassifierConfig;
pub use database::DatabaseConfig;
pub use dialogue::{DialogueConfig, GreetingScope};
pub use error::{ConfigError, ValidationError};
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Every section the console host needs. Only the catalog database has
/// no usable default.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Language understanding endpoint and key
    #[serde(default)]
    pub classifier: ClassifierConfig,

    pub database: DatabaseConfig,

    /// Where conversation and user state is kept between turns
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub dialogue: DialogueConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    ///
    /// Fails when `RETAIL_ASSISTANT__DATABASE__URL` is absent or a value has
    /// the wrong type. Range checks are left to [`validate`](Self::validate).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RETAIL_ASSISTANT")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Checks each section, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.classifier.validate(&self.runtime.environment)?;
        self.database.validate()?;
        self.storage.validate()?;
        self.dialogue.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("RETAIL_ASSISTANT__DATABASE__URL", "postgresql://test@localhost/adventureworks");
        env::set_var("RETAIL_ASSISTANT__CLASSIFIER__ENDPOINT", "https://westus.api.cognitive.microsoft.com");
        env::set_var("RETAIL_ASSISTANT__CLASSIFIER__APP_ID", "app-id");
        env::set_var("RETAIL_ASSISTANT__CLASSIFIER__SUBSCRIPTION_KEY", "key");
    }

    fn clear_env() {
        env::remove_var("RETAIL_ASSISTANT__DATABASE__URL");
        env::remove_var("RETAIL_ASSISTANT__CLASSIFIER__ENDPOINT");
        env::remove_var("RETAIL_ASSISTANT__CLASSIFIER__APP_ID");
        env::remove_var("RETAIL_ASSISTANT__CLASSIFIER__SUBSCRIPTION_KEY");
        env::remove_var("RETAIL_ASSISTANT__RUNTIME__ENVIRONMENT");
        env::remove_var("RETAIL_ASSISTANT__DIALOGUE__STORE_NAME");
        env::remove_var("RETAIL_ASSISTANT__STORAGE__BACKEND");
    }

    #[test]
    fn loads_required_sections_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/adventureworks");
        assert_eq!(config.classifier.app_id, "app-id");
        assert!(config.classifier.has_subscription_key());
    }

    #[test]
    fn minimal_environment_passes_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn dialogue_and_storage_fall_back_to_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.dialogue.store_name, "Adventure Works");
        assert_eq!(config.dialogue.greeting_scope, GreetingScope::Session);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn nested_variables_override_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("RETAIL_ASSISTANT__DIALOGUE__STORE_NAME", "Contoso");
        env::set_var("RETAIL_ASSISTANT__STORAGE__BACKEND", "file");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.dialogue.store_name, "Contoso");
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("RETAIL_ASSISTANT__RUNTIME__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
