//! Ethereum Virtual Machine (EVM) JSON-RPC data structures.
//!
//! Tron nodes expose the same JSON-RPC surface, so these types are shared by
//! every chain family.

mod filter;
mod log;
mod transaction;

pub use filter::LogFilter as EVMLogFilter;
pub use log::Log as EVMLog;
pub use transaction::Transaction as EVMTransaction;
