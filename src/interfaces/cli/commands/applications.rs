//! Application commands

use std::path::Path;

use colored::Colorize;
use uuid::Uuid;

use crate::applications::{AffiliateOffer, ApplicationBook, ApplicationStatus};
use crate::interfaces::cli::CliError;
use crate::services::{OfferCatalog, OfferSource};

/// 审核动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationAction {
    Approve,
    Reject,
    Cancel,
}

pub async fn submit_application(
    source: &dyn OfferSource,
    applications_path: &Path,
    affiliate: &str,
    offer: &str,
    traffic_source: Option<String>,
    notes: Option<String>,
) -> Result<(), CliError> {
    // offer 必须存在于目录中
    let catalog = OfferCatalog::load(source).await?;
    let target = catalog.get(offer.trim())?;

    let book = ApplicationBook::load_from_file(applications_path)?;
    let record = book.apply(affiliate, &target.id, traffic_source, notes)?;
    book.save_to_file(applications_path)?;

    println!(
        "{} {} {}",
        "✓".bold().green(),
        "Application submitted:".green(),
        record.id.to_string().cyan()
    );
    println!(
        "  {} {} → {}",
        "affiliate/offer:".dimmed(),
        record.affiliate_id,
        target.name.bold()
    );
    Ok(())
}

pub fn review_application(
    applications_path: &Path,
    id: Uuid,
    action: ApplicationAction,
) -> Result<(), CliError> {
    let book = ApplicationBook::load_from_file(applications_path)?;
    let record = match action {
        ApplicationAction::Approve => book.approve(id)?,
        ApplicationAction::Reject => book.reject(id)?,
        ApplicationAction::Cancel => book.cancel(id)?,
    };
    book.save_to_file(applications_path)?;

    let verb = match action {
        ApplicationAction::Approve => "approved".green(),
        ApplicationAction::Reject => "rejected".red(),
        ApplicationAction::Cancel => "cancelled".yellow(),
    };
    println!(
        "{} Application {} {}",
        "✓".bold().green(),
        record.id.to_string().cyan(),
        verb
    );
    Ok(())
}

pub fn list_applications(
    applications_path: &Path,
    affiliate: Option<String>,
    offer: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let book = ApplicationBook::load_from_file(applications_path)?;
    let records: Vec<AffiliateOffer> = match &affiliate {
        Some(affiliate) => book.for_affiliate(affiliate),
        None => book.all(),
    }
    .into_iter()
    .filter(|r| offer.as_deref().is_none_or(|o| r.offer_id == o))
    .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{} No applications found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Applications:".bold().green());
    println!();
    for record in &records {
        let status = match record.status {
            ApplicationStatus::Pending => record.status.to_string().yellow(),
            ApplicationStatus::Approved => record.status.to_string().green(),
            ApplicationStatus::Rejected => record.status.to_string().red(),
        };
        println!(
            "  {} {} → {} [{}] {}",
            record.id.to_string().cyan(),
            record.affiliate_id.bold(),
            record.offer_id,
            status,
            record.applied_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        if let Some(source) = &record.traffic_source {
            println!("      {} {}", "traffic:".dimmed(), source);
        }
        if let Some(notes) = &record.notes {
            println!("      {} {}", "notes:".dimmed(), notes);
        }
    }
    println!();
    println!(
        "{} Total: {} applications",
        "ℹ".bold().blue(),
        records.len().to_string().green()
    );
    Ok(())
}
