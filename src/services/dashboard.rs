//! 仪表盘服务

use serde::Serialize;
use tracing::info;

use super::source::OfferSource;
use crate::analytics::{DailyPoint, DashboardTotals, DateRange, build_daily_series, percent_change};
use crate::errors::Result;

/// 仪表盘报告
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub range: DateRange,
    pub series: Vec<DailyPoint>,
    pub totals: DashboardTotals,
    /// 相对上一等长周期的变化（百分比）
    pub clicks_change: Option<f64>,
    pub conversions_change: Option<f64>,
    pub commission_change: Option<f64>,
}

/// 仪表盘服务
pub struct DashboardService<'a> {
    source: &'a dyn OfferSource,
}

impl<'a> DashboardService<'a> {
    pub fn new(source: &'a dyn OfferSource) -> Self {
        Self { source }
    }

    /// 生成指定区间的报告
    pub async fn report(&self, range: DateRange) -> Result<DashboardReport> {
        info!(
            "Dashboard: report from {} to {} ({} days)",
            range.from,
            range.to,
            range.days()
        );

        let (clicks, conversions) =
            tokio::try_join!(self.source.fetch_clicks(), self.source.fetch_conversions())?;

        let series = build_daily_series(&clicks, &conversions, &range);
        let totals = DashboardTotals::compute_in_range(&clicks, &conversions, &range);
        let previous = DashboardTotals::compute_in_range(&clicks, &conversions, &range.previous());

        Ok(DashboardReport {
            range,
            series,
            clicks_change: percent_change(totals.clicks as f64, previous.clicks as f64),
            conversions_change: percent_change(
                totals.conversions as f64,
                previous.conversions as f64,
            ),
            commission_change: percent_change(totals.commission, previous.commission),
            totals,
        })
    }
}
