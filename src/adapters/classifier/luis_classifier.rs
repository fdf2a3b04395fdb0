//! LUIS Classifier - Implementation of IntentClassifier for the LUIS v2 API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = LuisConfig::new(endpoint, app_id, subscription_key)
//!     .with_timeout(Duration::from_secs(10))
//!     .with_staging(true);
//!
//! let classifier = LuisClassifier::new(config)?;
//! ```
//!
//! The utterance travels as the `q` query parameter; reqwest takes care of
//! percent-encoding it.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::classification::{ClassificationResult, Entity, EntityLabel};
use crate::ports::{ClassificationError, IntentClassifier};

/// Configuration for the LUIS classifier.
#[derive(Debug, Clone)]
pub struct LuisConfig {
    /// Region endpoint, e.g. `https://westus.api.cognitive.microsoft.com`.
    pub endpoint: String,
    pub app_id: String,
    subscription_key: Secret<String>,
    pub timeout: Duration,
    /// Query the staging slot instead of production.
    pub staging: bool,
}

impl LuisConfig {
    pub fn new(
        endpoint: impl Into<String>,
        app_id: impl Into<String>,
        subscription_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            app_id: app_id.into(),
            subscription_key: Secret::new(subscription_key.into()),
            timeout: Duration::from_secs(10),
            staging: false,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_staging(mut self, staging: bool) -> Self {
        self.staging = staging;
        self
    }

    fn subscription_key(&self) -> &str {
        self.subscription_key.expose_secret()
    }
}

/// LUIS v2 prediction client.
pub struct LuisClassifier {
    config: LuisConfig,
    client: Client,
}

impl LuisClassifier {
    pub fn new(config: LuisConfig) -> Result<Self, ClassificationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassificationError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn prediction_url(&self) -> String {
        format!(
            "{}/luis/v2.0/apps/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.app_id
        )
    }

    async fn send_request(&self, text: &str) -> Result<Response, ClassificationError> {
        let staging = if self.config.staging { "true" } else { "false" };

        self.client
            .get(self.prediction_url())
            .header("Ocp-Apim-Subscription-Key", self.config.subscription_key())
            .query(&[
                ("q", text),
                ("staging", staging),
                ("timezoneOffset", "0"),
                ("verbose", "false"),
                ("log", "true"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassificationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ClassificationError::network(format!("Connection failed: {}", e))
                } else {
                    ClassificationError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<ClassificationResult, ClassificationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassificationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: LuisResponse = response
            .json()
            .await
            .map_err(|e| ClassificationError::malformed(format!("Failed to parse response: {}", e)))?;

        body.into_result()
    }
}

#[async_trait]
impl IntentClassifier for LuisClassifier {
    #[tracing::instrument(skip(self, text), fields(app_id = %self.config.app_id))]
    async fn classify(&self, text: &str) -> Result<ClassificationResult, ClassificationError> {
        let response = self.send_request(text).await?;
        let result = self.parse_response(response).await?;

        tracing::debug!(
            intent = %result.top_intent,
            confidence = result.confidence,
            entities = result.entities.len(),
            "utterance classified"
        );
        Ok(result)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// LUIS v2 wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LuisResponse {
    #[serde(default)]
    query: String,
    top_scoring_intent: Option<LuisIntent>,
    #[serde(default)]
    entities: Vec<LuisEntity>,
}

#[derive(Debug, Deserialize)]
struct LuisIntent {
    intent: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LuisEntity {
    entity: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    start_index: usize,
    #[serde(default)]
    end_index: usize,
    score: Option<f64>,
}

impl LuisResponse {
    fn into_result(self) -> Result<ClassificationResult, ClassificationError> {
        let top = self
            .top_scoring_intent
            .ok_or_else(|| ClassificationError::malformed("No topScoringIntent in response"))?;

        let mut result = ClassificationResult::new(self.query, top.intent, top.score);
        for raw in self.entities {
            let mut entity = Entity::new(EntityLabel::from_wire(&raw.kind), raw.entity)
                .with_span(raw.start_index, raw.end_index);
            if let Some(score) = raw.score {
                entity = entity.with_score(score);
            }
            result = result.with_entity(entity);
        }
        Ok(result)
    }
}
