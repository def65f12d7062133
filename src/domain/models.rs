use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::domain::error::ResolverError;

/// How the destination moves data into the warehouse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestinationType {
    /// Bulk COPY from files staged in an S3 bucket.
    #[serde(rename = "COPY_S3")]
    CopyS3,
    /// Bulk COPY from files staged in a GCS bucket.
    #[serde(rename = "COPY_GCS")]
    CopyGcs,
    /// Row inserts through the warehouse's internal stage. The default.
    #[default]
    #[serde(rename = "INTERNAL_STAGING")]
    InternalStaging,
}

impl DestinationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationType::CopyS3 => "COPY_S3",
            DestinationType::CopyGcs => "COPY_GCS",
            DestinationType::InternalStaging => "INTERNAL_STAGING",
        }
    }

    pub fn is_copy(&self) -> bool {
        !matches!(self, DestinationType::InternalStaging)
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationType {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COPY_S3" => Ok(DestinationType::CopyS3),
            "COPY_GCS" => Ok(DestinationType::CopyGcs),
            "INTERNAL_STAGING" => Ok(DestinationType::InternalStaging),
            other => Err(ResolverError::Parse(format!("Unknown destination type: {}", other))),
        }
    }
}

/// Connector specification document as published by the connector.
///
/// Only `connectionSpecification.properties.host.pattern` is consumed; the rest is kept
/// as-is so the document can be passed along unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorSpecification {
    #[serde(rename = "documentationUrl", default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    #[serde(rename = "connectionSpecification")]
    pub connection_specification: serde_json::Value,
}

impl ConnectorSpecification {
    pub fn new(connection_specification: serde_json::Value) -> Self {
        Self {
            documentation_url: None,
            connection_specification,
        }
    }

    pub fn host_pattern(&self) -> Result<&str, ResolverError> {
        self.connection_specification
            .pointer("/properties/host/pattern")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ResolverError::Specification(
                    "properties.host.pattern is missing or not a string".to_string(),
                )
            })
    }
}

/// Result of checking a destination configuration before connecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub destination_type: DestinationType,
    pub host: Option<String>,
    pub host_accepted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn destination_type_uses_wire_names() {
        assert_eq!(serde_json::to_value(DestinationType::CopyS3).unwrap(), json!("COPY_S3"));
        assert_eq!(
            serde_json::from_value::<DestinationType>(json!("INTERNAL_STAGING")).unwrap(),
            DestinationType::InternalStaging
        );
        assert_eq!("COPY_GCS".parse::<DestinationType>().unwrap(), DestinationType::CopyGcs);
        assert_eq!(DestinationType::CopyGcs.to_string(), "COPY_GCS");
    }

    #[test]
    fn unknown_destination_type_is_rejected() {
        assert!(matches!(
            "COPY_AZURE".parse::<DestinationType>(),
            Err(ResolverError::Parse(_))
        ));
    }

    #[test]
    fn host_pattern_missing_is_specification_error() {
        let spec = ConnectorSpecification::new(json!({ "properties": { "host": { "type": "string" } } }));
        assert!(matches!(spec.host_pattern(), Err(ResolverError::Specification(_))));
    }

    #[test]
    fn host_pattern_is_read_from_connection_specification() {
        let spec: ConnectorSpecification = serde_json::from_value(json!({
            "connectionSpecification": {
                "properties": { "host": { "type": "string", "pattern": "^a$" } }
            }
        }))
        .unwrap();
        assert_eq!(spec.host_pattern().unwrap(), "^a$");
        assert!(spec.documentation_url.is_none());
    }
}
