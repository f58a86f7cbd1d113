//! Domain models and data structures for the notifier.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: Chain families and the JSON-RPC types shared by EVM and Tron nodes
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (chains, classified events, alert decisions)

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::ChainFamily;

pub use blockchain::evm::{EVMLog, EVMLogFilter, EVMTransaction};

// Re-export core types
pub use core::{AlertChannel, AlertDecision, ChainHandle, DecodedAction, EventKind};

// Re-export config types
pub use config::{
	AppConfig, ConfigError, ConfigLoader, EntityOfInterest, ScheduleConfig, SlackConfig,
	StartPosition, WatchTarget,
};
