use crate::domain::ports::ConfigDocument;

impl ConfigDocument for serde_json::Value {
    fn section(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn string_value(&self, key: &str) -> Option<&str> {
        self.section(key).and_then(|v| v.as_str())
    }
}

impl ConfigDocument for serde_yaml::Value {
    fn section(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    fn string_value(&self, key: &str) -> Option<&str> {
        self.section(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_keys_with_null_values_are_present() {
        let doc = json!({ "loading_method": { "s3_bucket_name": null } });
        let section = doc.section("loading_method").unwrap();
        assert!(section.has_key("s3_bucket_name"));
        assert!(section.string_value("s3_bucket_name").is_none());
    }

    #[test]
    fn json_scalars_have_no_keys() {
        let doc = json!({ "loading_method": "Internal Staging" });
        let section = doc.section("loading_method").unwrap();
        assert!(!section.has_key("bucket_name"));
        assert!(json!(null).section("loading_method").is_none());
    }

    #[test]
    fn yaml_mapping_lookup() {
        let doc: serde_yaml::Value = serde_yaml::from_str(
            "host: ab12345.us-east-2.aws.snowflakecomputing.com\nloading_method:\n  s3_bucket_name: ''\n",
        )
        .unwrap();
        assert_eq!(
            doc.string_value("host"),
            Some("ab12345.us-east-2.aws.snowflakecomputing.com")
        );
        assert!(doc.section("loading_method").unwrap().has_key("s3_bucket_name"));
        assert!(!doc.has_key("username"));
    }
}
