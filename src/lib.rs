//! Affilinker - affiliate offer catalog toolkit
//!
//! This library provides the data-shaping core behind an affiliate
//! marketing dashboard: normalizing stored offer rows, filtering offers,
//! computing commission ranges, and building dense daily click/conversion
//! series.
//!
//! # Architecture
//! - `offers`: Normalization, filtering and commission range calculation
//! - `analytics`: Daily series and dashboard totals
//! - `applications`: Affiliate application lifecycle
//! - `services`: Data source abstraction, catalog and dashboard services
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `system`: Logging initialization

pub mod analytics;
pub mod applications;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod offers;
pub mod services;
pub mod system;
