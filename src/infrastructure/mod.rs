// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod datadog_gateway;
pub mod json_mapper;
