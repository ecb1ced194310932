//! 仪表盘日序列聚合
//!
//! 输出是稠密序列：区间内每一天都有一个点，即使当天没有任何活动。

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::models::{ClickEvent, ConversionEvent, DailyPoint};
use super::range::DateRange;

/// 按日历日聚合点击和转化
///
/// 转化按其来源点击的日期归档，关联方式为点击 ID 精确匹配；
/// 找不到来源点击的转化不进入序列。
pub fn build_daily_series(
    clicks: &[ClickEvent],
    conversions: &[ConversionEvent],
    range: &DateRange,
) -> Vec<DailyPoint> {
    let mut series: Vec<DailyPoint> = range.iter().map(DailyPoint::empty).collect();
    if series.is_empty() {
        return series;
    }

    let index_of = |date: NaiveDate| -> Option<usize> {
        range
            .contains(date)
            .then(|| (date - range.from).num_days() as usize)
    };

    let mut click_dates: HashMap<&str, NaiveDate> = HashMap::with_capacity(clicks.len());
    for click in clicks {
        let date = click.created_at.date_naive();
        if !click.id.is_empty() {
            click_dates.insert(click.id.as_str(), date);
        }
        if let Some(idx) = index_of(date) {
            series[idx].clicks += 1;
        }
    }

    let mut unlinked = 0usize;
    for conversion in conversions {
        let Some(date) = conversion
            .click_id
            .as_deref()
            .and_then(|id| click_dates.get(id).copied())
        else {
            unlinked += 1;
            continue;
        };
        if let Some(idx) = index_of(date) {
            let point = &mut series[idx];
            point.conversions += 1;
            point.revenue += conversion.revenue;
            point.commission += conversion.commission;
        }
    }

    if unlinked > 0 {
        debug!(
            "Daily series: {} conversions without a matching click were skipped",
            unlinked
        );
    }

    series
}

/// 原始汇总（包含无法关联点击的转化）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardTotals {
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub commission: f64,
    /// 转化率（百分比）
    pub conversion_rate: f64,
    /// Earnings per click
    pub epc: f64,
}

impl DashboardTotals {
    pub fn compute(clicks: &[ClickEvent], conversions: &[ConversionEvent]) -> Self {
        let click_count = clicks.len() as u64;
        let conversion_count = conversions.len() as u64;
        let revenue: f64 = conversions.iter().map(|c| c.revenue).sum();
        let commission: f64 = conversions.iter().map(|c| c.commission).sum();

        let (conversion_rate, epc) = if click_count > 0 {
            (
                (conversion_count as f64 / click_count as f64) * 100.0,
                commission / click_count as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            clicks: click_count,
            conversions: conversion_count,
            revenue,
            commission,
            conversion_rate,
            epc,
        }
    }

    /// 只统计落在区间内的事件（转化按自身时间判断）
    pub fn compute_in_range(
        clicks: &[ClickEvent],
        conversions: &[ConversionEvent],
        range: &DateRange,
    ) -> Self {
        let clicks: Vec<ClickEvent> = clicks
            .iter()
            .filter(|c| range.contains(c.created_at.date_naive()))
            .cloned()
            .collect();
        let conversions: Vec<ConversionEvent> = conversions
            .iter()
            .filter(|c| range.contains(c.created_at.date_naive()))
            .cloned()
            .collect();
        Self::compute(&clicks, &conversions)
    }
}

/// 环比变化百分比；上期为 0 时无意义，返回 `None`
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_click_outside_range_ignored() {
        let clicks = vec![ClickEvent::new(
            "c1",
            Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(),
        )];
        let range = DateRange::new(d("2024-01-01"), d("2024-01-02")).unwrap();
        let series = build_daily_series(&clicks, &[], &range);
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|p| p.clicks == 0));
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(150.0, 100.0), Some(50.0));
        assert_eq!(percent_change(50.0, 100.0), Some(-50.0));
        assert_eq!(percent_change(10.0, 0.0), None);
    }

    #[test]
    fn test_totals_without_clicks() {
        let totals = DashboardTotals::compute(&[], &[]);
        assert_eq!(totals.conversion_rate, 0.0);
        assert_eq!(totals.epc, 0.0);
    }
}
