pub mod configuration;
pub mod http_client;
pub mod non_empty_string;
pub mod region_name;
pub mod tracing;
