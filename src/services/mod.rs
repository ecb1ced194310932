//! Service layer for business logic
//!
//! This module wires the pure catalog/analytics logic to a data source and
//! is shared by the CLI and library embedders.

mod catalog;
mod dashboard;
mod source;

pub use catalog::{OfferCatalog, OfferView};
pub use dashboard::{DashboardReport, DashboardService};
pub use source::{JsonFileSource, MemorySource, OfferSource, parse_rows};
