//! Language understanding service configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::runtime::Environment;

/// LUIS classifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Region endpoint, e.g. `https://westus.api.cognitive.microsoft.com`
    #[serde(default)]
    pub endpoint: String,

    /// LUIS application id
    #[serde(default)]
    pub app_id: String,

    /// Subscription key sent with every prediction request
    pub subscription_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Query the staging slot
    #[serde(default)]
    pub staging: bool,
}

impl ClassifierConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a subscription key is configured
    pub fn has_subscription_key(&self) -> bool {
        self.subscription_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate classifier configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.endpoint.is_empty() {
            return Err(ValidationError::MissingRequired("CLASSIFIER_ENDPOINT"));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ValidationError::InvalidClassifierEndpoint);
        }
        if *environment == Environment::Production && !self.endpoint.starts_with("https://") {
            return Err(ValidationError::EndpointMustBeHttps);
        }
        if self.app_id.is_empty() {
            return Err(ValidationError::MissingRequired("CLASSIFIER_APP_ID"));
        }
        if !self.has_subscription_key() {
            return Err(ValidationError::MissingRequired("CLASSIFIER_SUBSCRIPTION_KEY"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            app_id: String::new(),
            subscription_key: None,
            timeout_secs: default_timeout(),
            staging: false,
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ClassifierConfig {
        ClassifierConfig {
            endpoint: "https://westus.api.cognitive.microsoft.com".to_string(),
            app_id: "app-id".to_string(),
            subscription_key: Some(Secret::new("key".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_classifier_config_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.staging);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_missing_key() {
        let config = ClassifierConfig {
            subscription_key: Some(Secret::new(String::new())),
            ..valid()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("CLASSIFIER_SUBSCRIPTION_KEY"))
        ));
    }

    #[test]
    fn test_validation_http_rejected_in_production() {
        let config = ClassifierConfig {
            endpoint: "http://localhost:5000".to_string(),
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = ClassifierConfig {
            timeout_secs: 0,
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_debug_hides_subscription_key() {
        let config = ClassifierConfig {
            subscription_key: Some(Secret::new("very-secret".to_string())),
            ..valid()
        };
        assert!(!format!("{:?}", config).contains("very-secret"));
    }
}
