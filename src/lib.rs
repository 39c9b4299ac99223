//! Library exports for reuse in the binary and integration tests.

/// Application directory helpers.
pub mod app_dirs;
/// TOML configuration for the endpoint and source list.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent and bounded response reads.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Prediction records and the prediction-service client.
pub mod predictions;
/// The static source-publication name list.
pub mod source_list;
