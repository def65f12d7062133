use std::sync::Arc;
use tracing::{debug, error, info};
use crate::{
    application::{check_service::CheckService, host_validator::HostValidator},
    domain::{error::ResolverError, models::{CheckOutcome, ConnectorSpecification}, ports::DocumentSource},
    infrastructure::{bundled_spec::bundled_specification, file_source::FileDocumentSource},
};

pub const CONFIG_PATH_VAR: &str = "DESTINATION_CONFIG_PATH";
pub const SPEC_PATH_VAR: &str = "CONNECTOR_SPEC_PATH";

pub struct CliService {
    source: Arc<dyn DocumentSource>,
    check_service: CheckService,
}

impl CliService {
    /// Builds the service from `CONNECTOR_SPEC_PATH`, falling back to the bundled specification.
    pub async fn new() -> Result<Self, ResolverError> {
        let source: Arc<dyn DocumentSource> = Arc::new(FileDocumentSource::new());

        let spec = match std::env::var(SPEC_PATH_VAR) {
            Ok(spec_path) => {
                info!("Using connector specification: {}", spec_path);
                let document = source.load_document(&spec_path).await?;
                serde_json::from_value::<ConnectorSpecification>(document)
                    .map_err(|e| ResolverError::Specification(e.to_string()))?
            }
            Err(_) => {
                debug!("{} not set, using bundled specification", SPEC_PATH_VAR);
                bundled_specification()?
            }
        };

        Self::with_specification(source, &spec)
    }

    pub fn with_specification(
        source: Arc<dyn DocumentSource>,
        spec: &ConnectorSpecification,
    ) -> Result<Self, ResolverError> {
        let validator = HostValidator::from_specification(spec)?;
        debug!("Host pattern: {}", validator.pattern());
        Ok(Self {
            source,
            check_service: CheckService::new(Arc::new(validator)),
        })
    }

    /// Config path from the first argument, else `DESTINATION_CONFIG_PATH`.
    pub fn config_location(arg: Option<String>) -> Result<String, ResolverError> {
        arg.or_else(|| std::env::var(CONFIG_PATH_VAR).ok()).ok_or_else(|| {
            ResolverError::Config(format!(
                "no configuration path given; pass it as an argument or set {}",
                CONFIG_PATH_VAR
            ))
        })
    }

    pub async fn run(&self, config_location: &str) -> Result<CheckOutcome, ResolverError> {
        info!("Checking destination configuration: {}", config_location);
        let config = self.source.load_document(config_location).await.map_err(|e| {
            error!("Failed to load configuration {}: {}", config_location, e);
            e
        })?;

        let outcome = self.check_service.check(&config);
        info!(
            "Destination type: {}, host accepted: {}",
            outcome.destination_type, outcome.host_accepted
        );
        Ok(outcome)
    }
}
