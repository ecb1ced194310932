//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod applications;
mod config;
mod dashboard;
mod offers;

pub use applications::*;
pub use config::*;
pub use dashboard::*;
pub use offers::*;
