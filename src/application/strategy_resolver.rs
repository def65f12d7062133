use tracing::debug;
use crate::domain::{models::DestinationType, ports::ConfigDocument};

pub const LOADING_METHOD: &str = "loading_method";
pub const GCS_BUCKET_NAME: &str = "bucket_name";
pub const GCS_CREDENTIALS: &str = "credentials_json";
pub const S3_BUCKET_NAME: &str = "s3_bucket_name";

/// GCS COPY needs both the bucket and the service account credentials to be present.
pub fn is_gcs_copy<C: ConfigDocument + ?Sized>(config: &C) -> bool {
    config
        .section(LOADING_METHOD)
        .map(|method| method.has_key(GCS_BUCKET_NAME) && method.has_key(GCS_CREDENTIALS))
        .unwrap_or(false)
}

/// S3 COPY is chosen on the bucket name alone. Access keys are checked by the loader.
pub fn is_s3_copy<C: ConfigDocument + ?Sized>(config: &C) -> bool {
    config
        .section(LOADING_METHOD)
        .map(|method| method.has_key(S3_BUCKET_NAME))
        .unwrap_or(false)
}

/// Picks the loading strategy for a destination configuration. GCS wins over S3.
pub fn classify<C: ConfigDocument + ?Sized>(config: &C) -> DestinationType {
    let destination_type = if is_gcs_copy(config) {
        DestinationType::CopyGcs
    } else if is_s3_copy(config) {
        DestinationType::CopyS3
    } else {
        DestinationType::InternalStaging
    };

    debug!(
        "Resolved destination type {} (loading method present: {})",
        destination_type,
        config.has_key(LOADING_METHOD)
    );
    destination_type
}
