//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - constants: Constants for the application
//! - cron_utils: Validation of cron schedules
//! - http: Retryable HTTP client construction
//! - logging: Logging utilities

mod cron_utils;
mod http;

pub mod constants;
pub mod logging;
pub mod tests;

pub use constants::*;
pub use cron_utils::*;
pub use http::{create_retryable_http_client, HttpRetryConfig};
