use std::path::Path;
use tracing::{debug, error};
use crate::domain::error::ResolverError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` and `.yml` files are YAML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

pub fn parse_document(bytes: &[u8], format: DocumentFormat) -> Result<serde_json::Value, ResolverError> {
    debug!("Parsing {} bytes as {:?}", bytes.len(), format);
    let document = match format {
        DocumentFormat::Json => serde_json::from_slice(bytes).map_err(|e| {
            error!("Failed to parse JSON document: {}", e);
            ResolverError::Parse(e.to_string())
        })?,
        DocumentFormat::Yaml => serde_yaml::from_slice(bytes).map_err(|e| {
            error!("Failed to parse YAML document: {}", e);
            ResolverError::Parse(e.to_string())
        })?,
    };
    Ok(document)
}
