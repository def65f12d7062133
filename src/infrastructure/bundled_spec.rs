use crate::domain::{error::ResolverError, models::ConnectorSpecification};

const SPEC_JSON: &str = include_str!("../../resources/spec.json");

/// Connector specification shipped with the destination.
pub fn bundled_specification() -> Result<ConnectorSpecification, ResolverError> {
    serde_json::from_str(SPEC_JSON).map_err(|e| ResolverError::Specification(e.to_string()))
}
