//! System-level modules
//!
//! Process-wide concerns that sit outside the catalog logic:
//! - Logging initialization

pub mod logging;

pub use logging::init_logging;
