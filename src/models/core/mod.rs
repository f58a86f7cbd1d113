//! Core domain models for the notifier.
//!
//! This module contains the fundamental data structures that represent:
//! - Chains: monitored networks and their entity of interest
//! - Events: classified logs and decoded multi-sig actions
//! - Alerts: routing decisions handed to the notification layer

mod alert;
mod chain;
mod event;

pub use alert::{AlertChannel, AlertDecision};
pub use chain::ChainHandle;
pub use event::{DecodedAction, EventKind};
