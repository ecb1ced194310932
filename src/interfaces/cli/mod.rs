//! CLI interface module
//!
//! This module provides command-line interface functionality for affilinker.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::errors::AffilinkerError;
use crate::services::JsonFileSource;
use commands::{
    ApplicationAction, config_generate, config_show, list_applications, list_offers,
    review_application, show_dashboard, show_offer, submit_application,
};

#[derive(Debug)]
pub enum CliError {
    SourceError(AffilinkerError),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::SourceError(err) => err.format_simple(),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::SourceError(err) => err.format_colored(),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<AffilinkerError> for CliError {
    fn from(err: AffilinkerError) -> Self {
        CliError::SourceError(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::CommandError(format!("Failed to render JSON: {}", err))
    }
}

/// Run a CLI command from clap-parsed input
///
/// 配置取自全局 `get_config()`，调用前应先 `init_config`
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    let config = get_config();
    let source = JsonFileSource::from_config(&config.data);
    let applications_path = config.data.applications_path();

    match cmd {
        Commands::Offers {
            filter,
            featured,
            json,
        } => list_offers(&source, filter.into(), featured, json, &config.display).await,

        Commands::Offer { id, json } => show_offer(&source, &id, json, &config.display).await,

        Commands::Dashboard { from, to, json } => {
            show_dashboard(&source, from, to, json, &config.display).await
        }

        Commands::Apply {
            affiliate,
            offer,
            traffic_source,
            notes,
        } => {
            submit_application(
                &source,
                &applications_path,
                &affiliate,
                &offer,
                traffic_source,
                notes,
            )
            .await
        }

        Commands::Approve { id } => {
            review_application(&applications_path, id, ApplicationAction::Approve)
        }

        Commands::Reject { id } => {
            review_application(&applications_path, id, ApplicationAction::Reject)
        }

        Commands::Cancel { id } => {
            review_application(&applications_path, id, ApplicationAction::Cancel)
        }

        Commands::Applications {
            affiliate,
            offer,
            json,
        } => list_applications(&applications_path, affiliate, offer, json),

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force)
            }
            ConfigCommands::Show => config_show(&config),
        },
    }
}
