use std::path::Path;
use async_trait::async_trait;
use tracing::{debug, error, info};
use crate::{
    domain::{error::ResolverError, ports::DocumentSource},
    infrastructure::parsers::document_parser::{parse_document, DocumentFormat},
};

/// Loads JSON or YAML documents from the local filesystem.
#[derive(Debug, Default, Clone)]
pub struct FileDocumentSource;

impl FileDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn load_document(&self, location: &str) -> Result<serde_json::Value, ResolverError> {
        debug!("Reading document from {}", location);
        let bytes = tokio::fs::read(location).await.map_err(|e| {
            error!("Failed to read {}: {}", location, e);
            ResolverError::Io(format!("{}: {}", location, e))
        })?;

        let format = DocumentFormat::from_path(Path::new(location));
        let document = parse_document(&bytes, format)?;
        info!("Loaded {:?} document from {} ({} bytes)", format, location, bytes.len());
        Ok(document)
    }
}
