//! DeFi notifier library.
//!
//! Watches stablecoin token contracts on EVM and Tron chains for blacklist,
//! block and multi-sig governance events and reports them to Slack.
//!
//! - `bootstrap`: turns configuration into running services
//! - `models`: configuration, chain and alert types
//! - `services`: node clients, decoding, scanning and notification
//! - `utils`: logging, HTTP retry, cron validation and test builders

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
