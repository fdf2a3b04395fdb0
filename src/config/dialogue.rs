//! Dialogue behaviour configuration

use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Tunables for the dialogue engine
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Classifications scoring at or below this fall back to help handling
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Pause emitted between a listing and its follow-up prompt
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Sales tax applied on checkout
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Image shown on the introduction card
    #[serde(default = "default_intro_image_url")]
    pub intro_image_url: String,

    #[serde(default)]
    pub greeting_scope: GreetingScope,

    /// Ask for a name before handling anything else
    #[serde(default)]
    pub collect_name: bool,
}

/// Who the welcome greeting is sent to
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GreetingScope {
    /// Once per conversation
    #[default]
    Session,
    /// Once per process, whichever conversation arrives first
    Process,
}

impl DialogueConfig {
    /// Get reply delay as Duration
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Validate dialogue configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ValidationError::InvalidConfidenceThreshold);
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(ValidationError::InvalidTaxRate);
        }
        if self.reply_delay_ms > 60_000 {
            return Err(ValidationError::ReplyDelayTooLong);
        }
        if self.store_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DIALOGUE_STORE_NAME"));
        }
        Ok(())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            reply_delay_ms: default_reply_delay_ms(),
            tax_rate: default_tax_rate(),
            store_name: default_store_name(),
            intro_image_url: default_intro_image_url(),
            greeting_scope: GreetingScope::default(),
            collect_name: false,
        }
    }
}

fn default_confidence_threshold() -> f64 {
    0.4
}

fn default_reply_delay_ms() -> u64 {
    5000
}

fn default_tax_rate() -> Decimal {
    Decimal::new(16, 2)
}

fn default_store_name() -> String {
    "Adventure Works".to_string()
}

fn default_intro_image_url() -> String {
    "https://drive.google.com/uc?id=1eE_WlkW8G9cSI_w9heIWeo53ZkMtQu4x".to_string()
}
