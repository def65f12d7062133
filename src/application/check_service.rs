use std::sync::Arc;
use tracing::{info, warn};
use crate::{
    application::{host_validator::HostValidator, strategy_resolver::classify},
    domain::{models::CheckOutcome, ports::ConfigDocument},
};

pub const HOST: &str = "host";

pub struct CheckService {
    host_validator: Arc<HostValidator>,
}

impl CheckService {
    pub fn new(host_validator: Arc<HostValidator>) -> Self {
        Self { host_validator }
    }

    /// Resolves the loading strategy and checks the configured host.
    /// A missing or non-string `host` is reported as rejected.
    pub fn check<C: ConfigDocument + ?Sized>(&self, config: &C) -> CheckOutcome {
        let destination_type = classify(config);
        let host = config.string_value(HOST);

        let host_accepted = match host {
            Some(host) if self.host_validator.matches(host) => {
                info!("Configuration check passed - destination type: {}", destination_type);
                true
            }
            Some(host) => {
                warn!("Host '{}' does not match pattern '{}'", host, self.host_validator.pattern());
                false
            }
            None => {
                warn!("Configuration has no '{}' string field", HOST);
                false
            }
        };

        CheckOutcome {
            destination_type,
            host: host.map(str::to_string),
            host_accepted,
        }
    }
}
