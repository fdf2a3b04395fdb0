//! File-based Session Store Adapter
//!
//! Stores each property as a YAML file under
//! `{base}/{scope}/{id}/{property}.yaml`.
//!
//! Ids and property names are escaped byte by byte: ASCII letters, digits
//! and `-` pass through, every other byte becomes `_XX` (uppercase hex).
//! Distinct ids therefore always map to distinct directories, and no id can
//! name a parent directory.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{SessionStore, SessionStoreError, StateKey, StateScope};

/// File-based storage for session state
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a property
    fn file_path(&self, key: &StateKey) -> PathBuf {
        let (scope, id) = match &key.scope {
            StateScope::Conversation(id) => ("conversation", id.as_str()),
            StateScope::User(id) => ("user", id.as_str()),
        };
        self.base_path
            .join(scope)
            .join(encode_segment(id))
            .join(format!("{}.yaml", encode_segment(&key.property)))
    }

    fn temp_path(path: &Path) -> PathBuf {
        path.with_extension("yaml.tmp")
    }

    /// Serializes `value` and writes it next to its final location.
    async fn stage(&self, key: &StateKey, value: &Value) -> Result<PathBuf, SessionStoreError> {
        let path = self.file_path(key);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(value)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        let temp = Self::temp_path(&path);
        fs::write(&temp, yaml)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        Ok(path)
    }

    async fn publish(path: &Path) -> Result<(), SessionStoreError> {
        fs::rename(Self::temp_path(path), path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }
}

/// Escapes one path segment. `_` is itself escaped so the mapping is
/// one-to-one.
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("_{:02X}", byte));
        }
    }
    encoded
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &StateKey) -> Result<Option<Value>, SessionStoreError> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let value = serde_yaml::from_str(&yaml).map_err(|e| {
            SessionStoreError::DeserializationFailed {
                key: key.storage_key(),
                reason: e.to_string(),
            }
        })?;

        Ok(Some(value))
    }

    async fn set(&self, key: &StateKey, value: Value) -> Result<(), SessionStoreError> {
        let path = self.stage(key, &value).await?;
        Self::publish(&path).await
    }

    async fn commit(&self, changes: Vec<(StateKey, Value)>) -> Result<(), SessionStoreError> {
        // Stage everything first; nothing becomes visible unless all staged.
        let mut staged = Vec::with_capacity(changes.len());
        for (key, value) in &changes {
            match self.stage(key, value).await {
                Ok(path) => staged.push(path),
                Err(e) => {
                    for path in &staged {
                        let _ = fs::remove_file(Self::temp_path(path)).await;
                    }
                    return Err(e);
                }
            }
        }

        // A crash between renames can still leave part of the batch
        // published; a failed rename drops the temps not yet published.
        for (published, path) in staged.iter().enumerate() {
            if let Err(e) = Self::publish(path).await {
                for pending in &staged[published..] {
                    let _ = fs::remove_file(Self::temp_path(pending)).await;
                }
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ConversationId, UserId};
    use serde_json::json;
    use tempfile::TempDir;

    fn user_key(property: &str) -> StateKey {
        StateKey::user(&UserId::new("user-1").unwrap(), property)
    }

    #[tokio::test]
    async fn test_file_store_missing_property_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        assert_eq!(store.get(&user_key("Cart")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        let value = json!({"customer_name": "Ana", "customer_id": 7});
        store.set(&user_key("CustomerProfile"), value.clone()).await.unwrap();

        assert_eq!(store.get(&user_key("CustomerProfile")).await.unwrap(), Some(value));
        assert!(temp_dir
            .path()
            .join("user/user-1/CustomerProfile.yaml")
            .exists());
    }

    #[tokio::test]
    async fn test_file_store_commit_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let conversation = ConversationId::new("conv-9").unwrap();

        store
            .commit(vec![
                (user_key("ShoppingCart"), json!([])),
                (
                    StateKey::conversation(&conversation, "ConversationProgress"),
                    json!({"awaiting_name": false}),
                ),
            ])
            .await
            .unwrap();

        let dir = temp_dir.path().join("conversation/conv-9");
        assert!(dir.join("ConversationProgress.yaml").exists());
        assert!(!dir.join("ConversationProgress.yaml.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_escapes_path_segments() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let key = StateKey::user(&UserId::new("../escape").unwrap(), "Cart");

        store.set(&key, json!(1)).await.unwrap();

        assert!(temp_dir
            .path()
            .join("user/_2E_2E_2Fescape/Cart.yaml")
            .exists());
    }

    #[tokio::test]
    async fn test_file_store_keeps_lookalike_users_apart() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let ana = StateKey::user(&UserId::new("ana.b@x.com").unwrap(), "ShoppingCart");
        let other = StateKey::user(&UserId::new("ana_b_x_com").unwrap(), "ShoppingCart");

        store.set(&ana, json!(["ana's line"])).await.unwrap();

        assert_eq!(store.get(&other).await.unwrap(), None);
        store.set(&other, json!([])).await.unwrap();
        assert_eq!(store.get(&ana).await.unwrap(), Some(json!(["ana's line"])));
    }

    #[test]
    fn encode_segment_is_one_to_one_for_separator_lookalikes() {
        assert_eq!(encode_segment("user-1"), "user-1");
        assert_eq!(encode_segment("a.b"), "a_2Eb");
        assert_eq!(encode_segment("a_2Eb"), "a_5F2Eb");
        assert_eq!(encode_segment("é"), "_C3_A9");
    }

    #[tokio::test]
    async fn test_file_store_failed_publish_removes_pending_temps() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let conversation = ConversationId::new("conv-3").unwrap();
        let blocked = StateKey::conversation(&conversation, "ConversationProgress");
        // A directory in place of the target file makes its rename fail.
        std::fs::create_dir_all(store.file_path(&blocked).join("occupied")).unwrap();

        let result = store
            .commit(vec![
                (blocked.clone(), json!({"greeted": true})),
                (user_key("ShoppingCart"), json!([])),
            ])
            .await;

        assert!(matches!(result, Err(SessionStoreError::IoError(_))));
        let cart = store.file_path(&user_key("ShoppingCart"));
        assert!(!FileSessionStore::temp_path(&cart).exists());
        assert!(!cart.exists());
        assert!(!FileSessionStore::temp_path(&store.file_path(&blocked)).exists());
    }

    #[tokio::test]
    async fn test_file_store_rejects_corrupt_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let dir = temp_dir.path().join("user/user-1");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Cart.yaml"), "key: [unclosed").unwrap();

        let result = store.get(&user_key("Cart")).await;

        assert!(matches!(
            result,
            Err(SessionStoreError::DeserializationFailed { .. })
        ));
    }
}
