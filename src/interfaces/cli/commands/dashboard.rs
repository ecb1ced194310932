//! Dashboard command

use colored::Colorize;

use crate::analytics::DateRange;
use crate::config::DisplayConfig;
use crate::interfaces::cli::CliError;
use crate::services::{DashboardService, OfferSource};

pub async fn show_dashboard(
    source: &dyn OfferSource,
    from: Option<String>,
    to: Option<String>,
    json: bool,
    display: &DisplayConfig,
) -> Result<(), CliError> {
    let range = DateRange::parse(from.as_deref(), to.as_deref(), display.dashboard_days)
        .map_err(|e| CliError::ParseError(e.message().to_string()))?;

    let report = DashboardService::new(source).report(range).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let money = |v: f64| format!("{}{:.*}", display.currency_symbol, display.decimals as usize, v);

    println!(
        "{} {} → {}",
        "Dashboard".bold().green(),
        report.range.from,
        report.range.to
    );
    println!();
    println!(
        "  {:<12} {:>8} {:>12} {:>12} {:>12}",
        "date".dimmed(),
        "clicks".dimmed(),
        "conversions".dimmed(),
        "revenue".dimmed(),
        "commission".dimmed()
    );
    for point in &report.series {
        let line = format!(
            "  {:<12} {:>8} {:>12} {:>12} {:>12}",
            point.date.to_string(),
            point.clicks,
            point.conversions,
            money(point.revenue),
            money(point.commission)
        );
        if point.clicks == 0 && point.conversions == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }

    let change = |v: Option<f64>| match v {
        Some(pct) if pct >= 0.0 => format!("+{:.1}%", pct).green().to_string(),
        Some(pct) => format!("{:.1}%", pct).red().to_string(),
        None => "n/a".dimmed().to_string(),
    };

    let totals = &report.totals;
    println!();
    println!(
        "  {} {} ({})",
        "clicks:".dimmed(),
        totals.clicks.to_string().cyan(),
        change(report.clicks_change)
    );
    println!(
        "  {} {} ({})",
        "conversions:".dimmed(),
        totals.conversions.to_string().cyan(),
        change(report.conversions_change)
    );
    println!("  {} {}", "revenue:".dimmed(), money(totals.revenue));
    println!(
        "  {} {} ({})",
        "commission:".dimmed(),
        money(totals.commission).green(),
        change(report.commission_change)
    );
    println!(
        "  {} {:.2}%   {} {}",
        "conversion rate:".dimmed(),
        totals.conversion_rate,
        "EPC:".dimmed(),
        money(totals.epc)
    );
    Ok(())
}
