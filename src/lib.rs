pub mod application;
pub mod cli_service;
pub mod domain;
pub mod infrastructure;

pub use application::host_validator::{matches, HostValidator};
pub use application::strategy_resolver::{classify, is_gcs_copy, is_s3_copy};
pub use domain::{error::ResolverError, models::DestinationType};
