//! Offer listing and detail commands

use colored::Colorize;

use crate::config::DisplayConfig;
use crate::interfaces::cli::CliError;
use crate::offers::{FilterSpec, Offer, OfferStatus};
use crate::services::{OfferCatalog, OfferSource};

pub async fn list_offers(
    source: &dyn OfferSource,
    spec: FilterSpec,
    featured_only: bool,
    json: bool,
    display: &DisplayConfig,
) -> Result<(), CliError> {
    let catalog = OfferCatalog::load(source).await?;
    let matched: Vec<&Offer> = catalog
        .search(&spec)
        .into_iter()
        .filter(|o| !featured_only || o.featured)
        .collect();

    if json {
        let views: Vec<_> = matched
            .iter()
            .map(|o| OfferCatalog::view(o, display))
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("{} No offers match the current filters", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Offers:".bold().green());
    println!();
    for offer in &matched {
        let view = OfferCatalog::view(offer, display);
        let mut parts = vec![format!(
            "{} {}",
            offer.id.cyan(),
            offer.name.bold()
        )];
        parts.push(format!("[{}]", offer.commission_type).magenta().to_string());
        parts.push(view.commission.green().to_string());
        if let Some(niche) = &offer.niche {
            parts.push(format!("({})", niche).dimmed().to_string());
        }
        parts.push(colored_status(offer.status));
        if offer.featured {
            parts.push("★".yellow().to_string());
        }
        println!("  {}", parts.join(" "));

        let geos: Vec<String> = view
            .geos
            .iter()
            .map(|g| match g.flag {
                Some(flag) => format!("{} {}", flag, g.code),
                None => g.code.clone(),
            })
            .collect();
        println!("      {} {}", "geo:".dimmed(), geos.join(", "));
    }
    println!();
    println!(
        "{} Showing {} of {} offers",
        "ℹ".bold().blue(),
        matched.len().to_string().green(),
        catalog.len()
    );
    Ok(())
}

pub async fn show_offer(
    source: &dyn OfferSource,
    id: &str,
    json: bool,
    display: &DisplayConfig,
) -> Result<(), CliError> {
    let catalog = OfferCatalog::load(source).await?;
    let offer = catalog.get(id)?;
    let view = OfferCatalog::view(offer, display);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{} {}", offer.name.bold().green(), format!("({})", offer.id).dimmed());
    if let Some(description) = &offer.description {
        println!("  {}", description);
    }
    if let Some(url) = &offer.destination_url {
        println!("  {} {}", "url:".dimmed(), url.blue().underline());
    }
    println!("  {} {}", "status:".dimmed(), colored_status(offer.status));
    println!(
        "  {} {} {}",
        "commission:".dimmed(),
        view.commission.green(),
        format!("[{}]", offer.commission_type).magenta()
    );

    if !offer.geo_commissions.is_empty() {
        println!("  {}", "per-country commission:".dimmed());
        for gc in &offer.geo_commissions {
            let info = crate::offers::country_info(&gc.country);
            let value = match gc.value_for(&offer.commission_type) {
                None => "n/a".to_string(),
                Some(v) if offer.commission_type.is_rev_share() => format!("{}%", v),
                Some(v) => format!(
                    "{}{:.*}",
                    display.currency_symbol,
                    display.decimals as usize,
                    v
                ),
            };
            println!(
                "    {} {:<20} {}",
                info.flag.unwrap_or(" "),
                info.label,
                value
            );
        }
    }

    let labels: Vec<String> = view
        .geos
        .iter()
        .map(|g| format!("{} {}", g.flag.unwrap_or(""), g.label).trim().to_string())
        .collect();
    println!("  {} {}", "targets:".dimmed(), labels.join(", "));

    if !view.restricted.is_empty() {
        let restricted: Vec<&str> = view.restricted.iter().map(|g| g.label.as_str()).collect();
        println!("  {} {}", "restricted:".dimmed(), restricted.join(", ").red());
    }
    if !offer.allowed_traffic_sources.is_empty() {
        println!(
            "  {} {}",
            "traffic:".dimmed(),
            offer.allowed_traffic_sources.join(", ")
        );
    }
    Ok(())
}

fn colored_status(status: OfferStatus) -> String {
    let label = status.to_string();
    match status {
        OfferStatus::Active => label.green().to_string(),
        OfferStatus::Paused => label.yellow().to_string(),
        OfferStatus::Inactive => label.red().to_string(),
        OfferStatus::Pending => label.dimmed().to_string(),
    }
}
