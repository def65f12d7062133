pub mod check_service;
pub mod host_validator;
pub mod strategy_resolver;
