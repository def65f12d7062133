use async_trait::async_trait;
use crate::domain::error::ResolverError;

/// Read-only key/value view over a loosely typed configuration document.
pub trait ConfigDocument {
    /// Nested value stored under `key`, if this node is an object that has it.
    fn section(&self, key: &str) -> Option<&Self>;

    /// Whether this node is an object containing `key`, whatever its value.
    fn has_key(&self, key: &str) -> bool {
        self.section(key).is_some()
    }

    fn string_value(&self, key: &str) -> Option<&str>;
}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn load_document(&self, location: &str) -> Result<serde_json::Value, ResolverError>;
}
