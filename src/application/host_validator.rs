use regex::Regex;
use tracing::{debug, error};
use crate::domain::{error::ResolverError, models::ConnectorSpecification};

/// Host pattern compiled once and reused for every candidate.
///
/// Matching is a search, not a full-string match: the pattern has to anchor itself.
#[derive(Debug, Clone)]
pub struct HostValidator {
    regex: Regex,
}

impl HostValidator {
    pub fn new(pattern: &str) -> Result<Self, ResolverError> {
        debug!("Compiling host pattern: {}", pattern);
        let regex = Regex::new(pattern).map_err(|e| {
            error!("Invalid host pattern '{}': {}", pattern, e);
            ResolverError::Pattern(e.to_string())
        })?;
        Ok(Self { regex })
    }

    pub fn from_specification(spec: &ConnectorSpecification) -> Result<Self, ResolverError> {
        Self::new(spec.host_pattern()?)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let is_match = self.regex.is_match(candidate);
        debug!("Host '{}' matches pattern: {}", candidate, is_match);
        is_match
    }
}

/// One-shot form of [`HostValidator::matches`]; compiles `host_pattern` on every call.
pub fn matches(host_pattern: &str, candidate: &str) -> Result<bool, ResolverError> {
    Ok(HostValidator::new(host_pattern)?.matches(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_match_is_allowed_by_unanchored_pattern() {
        assert!(matches(r"snowflakecomputing\.com", "x.snowflakecomputing.com:8080").unwrap());
        assert!(!matches(r"^snowflakecomputing\.com$", "x.snowflakecomputing.com").unwrap());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(matches!(
            HostValidator::new("([a-z]+"),
            Err(ResolverError::Pattern(_))
        ));
        assert!(matches!(matches("[", "anything"), Err(ResolverError::Pattern(_))));
    }

    #[test]
    fn validator_from_specification() {
        let spec = ConnectorSpecification::new(json!({
            "properties": { "host": { "pattern": "^[a-z]+\\.example\\.com$" } }
        }));
        let validator = HostValidator::from_specification(&spec).unwrap();
        assert_eq!(validator.pattern(), "^[a-z]+\\.example\\.com$");
        assert!(validator.matches("abc.example.com"));
        assert!(!validator.matches("abc.example.com.evil"));
    }

    #[test]
    fn specification_without_pattern_is_an_error() {
        let spec = ConnectorSpecification::new(json!({ "properties": {} }));
        assert!(matches!(
            HostValidator::from_specification(&spec),
            Err(ResolverError::Specification(_))
        ));
    }
}
