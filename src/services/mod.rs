//! Core services of the notifier.
//!
//! - `blockchain`: JSON-RPC clients and transports
//! - `blockwatcher`: scheduled window scans, checkpoints and health reports
//! - `decoder`: address, log and call data decoding
//! - `notification`: Slack delivery and message templates

pub mod blockchain;
pub mod blockwatcher;
pub mod decoder;
pub mod notification;
