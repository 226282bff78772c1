pub mod configuration;
pub mod domain;
pub mod favorites_client;
pub mod suite;
pub mod telemetry;
pub mod validation;
