//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for affilinker using clap's derive macros.

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::offers::{CommissionType, FilterSpec, OfferStatus};

/// Affilinker - affiliate offer catalog toolkit
#[derive(Parser)]
#[command(name = "affilinker")]
#[command(version)]
#[command(about = "Browse affiliate offers, review applications and inspect dashboard series", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List offers matching the given filters
    Offers {
        #[command(flatten)]
        filter: FilterArgs,

        /// Only featured offers
        #[arg(long)]
        featured: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single offer with commission range and geo targeting
    Offer {
        /// Offer ID
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Show the daily click/conversion series
    Dashboard {
        /// Start date (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        to: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Apply to promote an offer
    Apply {
        /// Affiliate ID
        affiliate: String,

        /// Offer ID
        offer: String,

        /// Where the traffic will come from
        #[arg(long)]
        traffic_source: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Approve a pending application
    Approve { id: Uuid },

    /// Reject an application
    Reject { id: Uuid },

    /// Cancel a pending application
    Cancel { id: Uuid },

    /// List applications
    Applications {
        /// Only applications of this affiliate
        #[arg(long)]
        affiliate: Option<String>,

        /// Only applications for this offer
        #[arg(long)]
        offer: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Offer filter flags; every flag may be repeated
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Niche (category)
    #[arg(long = "niche")]
    pub niches: Vec<String>,

    /// Minimum payout (percent for RevShare offers)
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum payout (percent for RevShare offers)
    #[arg(long)]
    pub max: Option<f64>,

    /// Commission type: CPA, CPL, CPS, CPI, RevShare
    #[arg(long = "type")]
    pub offer_types: Vec<CommissionType>,

    /// Country code
    #[arg(long = "geo")]
    pub geos: Vec<String>,

    /// Traffic source label
    #[arg(long = "traffic")]
    pub traffic_types: Vec<String>,

    /// Offer status: active, paused, inactive, pending
    #[arg(long = "status")]
    pub status: Vec<OfferStatus>,
}

impl From<FilterArgs> for FilterSpec {
    fn from(args: FilterArgs) -> Self {
        FilterSpec {
            niches: args.niches,
            payout_min: args.min,
            payout_max: args.max,
            offer_types: args.offer_types,
            geos: args.geos,
            traffic_types: args.traffic_types,
            status: args.status,
        }
    }
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: affilinker.example.toml)
        output_path: Option<String>,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
