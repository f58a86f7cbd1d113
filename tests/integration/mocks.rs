//! Mock implementations shared by the integration tests.


pub use clients::*;
pub use services::*;
pub use transports::*;
