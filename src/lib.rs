//! Liveness endpoint reporting application metadata.
//!
//! The [`AppInfo`] snapshot is read from `APP_NAME`, `VERSION` and `ENVIRONMENT` once at startup and served as JSON
//! on `GET /api/v1/healtz` for the lifetime of the process.

pub mod config;
pub mod error;
pub mod health;
pub mod server;

#[cfg(test)]
mod test_env;

pub use crate::config::{ServerConfig, ServerConfigBuilder};
pub use crate::error::{AppInfoError, Result};
pub use crate::health::{ENCODE_ERROR_BODY, HEALTZ_PATH, encode_response, router};
pub use crate::server::{AppInfoServer, run, serve, serve_listener};
pub use appinfo_provider::{AppInfo, UNKNOWN, attribute_value, get_app_info};
