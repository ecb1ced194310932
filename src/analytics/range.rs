//! 包含两端的日期范围

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AffilinkerError, Result};

/// 未指定日期时默认窗口的上限（约十年）
pub const MAX_DEFAULT_DAYS: u32 = 3660;

/// 闭区间 `[from, to]`，按 UTC 日历日计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(AffilinkerError::validation(format!(
                "Start date {} must not be later than end date {}",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    /// 以 `today` 结尾的最近 n 天（n 为 0 时按 1 天处理）
    ///
    /// 超出日历下界时截断到 `NaiveDate::MIN`
    pub fn last_n_days(n: u32, today: NaiveDate) -> Self {
        let span = i64::from(n.max(1)) - 1;
        Self {
            from: today
                .checked_sub_signed(Duration::days(span))
                .unwrap_or(NaiveDate::MIN),
            to: today,
        }
    }

    /// 区间包含的日历天数
    pub fn days(&self) -> usize {
        if self.from > self.to {
            0
        } else {
            ((self.to - self.from).num_days() + 1) as usize
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take(self.days())
    }

    /// 与当前区间等长、紧邻其前的区间，用于环比
    pub fn previous(&self) -> Self {
        let len = self.days().max(1) as i64;
        Self {
            from: self
                .from
                .checked_sub_signed(Duration::days(len))
                .unwrap_or(NaiveDate::MIN),
            to: self.from.pred_opt().unwrap_or(NaiveDate::MIN),
        }
    }

    /// 严格解析日期范围，支持 RFC3339 和 YYYY-MM-DD 格式
    ///
    /// 两端都缺省时返回以今天结尾的 `default_days` 天；只提供一端、格式错误、
    /// 起始晚于结束、或 `default_days` 超过 `MAX_DEFAULT_DAYS` 都会返回错误。
    pub fn parse(start: Option<&str>, end: Option<&str>, default_days: u32) -> Result<Self> {
        match (start, end) {
            (Some(s), Some(e)) => {
                let from = parse_date(s).ok_or_else(|| {
                    AffilinkerError::date_parse(format!(
                        "Invalid start date format: '{}'. Supported formats: RFC3339 or YYYY-MM-DD",
                        s
                    ))
                })?;
                let to = parse_date(e).ok_or_else(|| {
                    AffilinkerError::date_parse(format!(
                        "Invalid end date format: '{}'. Supported formats: RFC3339 or YYYY-MM-DD",
                        e
                    ))
                })?;
                Self::new(from, to)
            }
            (Some(_), None) => Err(AffilinkerError::validation(
                "Start date is provided but end date is missing",
            )),
            (None, Some(_)) => Err(AffilinkerError::validation(
                "End date is provided but start date is missing",
            )),
            (None, None) if default_days > MAX_DEFAULT_DAYS => {
                Err(AffilinkerError::validation(format!(
                    "Default window of {} days exceeds the limit of {} days",
                    default_days, MAX_DEFAULT_DAYS
                )))
            }
            (None, None) => Ok(Self::last_n_days(default_days, Utc::now().date_naive())),
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_days_inclusive() {
        let range = DateRange::new(d("2024-01-01"), d("2024-01-03")).unwrap();
        assert_eq!(range.days(), 3);
        assert_eq!(range.iter().count(), 3);
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::new(d("2024-02-29"), d("2024-02-29")).unwrap();
        assert_eq!(range.days(), 1);
        assert!(range.contains(d("2024-02-29")));
        assert!(!range.contains(d("2024-03-01")));
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(DateRange::new(d("2024-01-05"), d("2024-01-01")).is_err());
    }

    #[test]
    fn test_last_n_days() {
        let range = DateRange::last_n_days(7, d("2024-03-10"));
        assert_eq!(range.from, d("2024-03-04"));
        assert_eq!(range.days(), 7);
        assert_eq!(DateRange::last_n_days(0, d("2024-03-10")).days(), 1);
    }

    #[test]
    fn test_huge_window_saturates_at_calendar_start() {
        let today = d("2024-03-10");
        let range = DateRange::last_n_days(u32::MAX, today);
        assert_eq!(range.from, NaiveDate::MIN);
        assert_eq!(range.to, today);
        assert!(range.from <= range.to);

        let prev = range.previous();
        assert_eq!(prev.from, NaiveDate::MIN);
        assert_eq!(prev.to, NaiveDate::MIN);
    }

    #[test]
    fn test_oversized_default_window_rejected() {
        let err = DateRange::parse(None, None, u32::MAX).unwrap_err();
        assert_eq!(err.code(), "E003");
        assert_eq!(
            DateRange::parse(None, None, MAX_DEFAULT_DAYS).unwrap().days(),
            MAX_DEFAULT_DAYS as usize
        );
    }

    #[test]
    fn test_previous_period() {
        let range = DateRange::new(d("2024-01-08"), d("2024-01-14")).unwrap();
        let prev = range.previous();
        assert_eq!(prev.from, d("2024-01-01"));
        assert_eq!(prev.to, d("2024-01-07"));
    }

    #[test]
    fn test_parse_formats() {
        let range = DateRange::parse(Some("2024-01-01T10:00:00Z"), Some("2024-01-31"), 30).unwrap();
        assert_eq!(range.from, d("2024-01-01"));
        assert_eq!(range.to, d("2024-01-31"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(DateRange::parse(Some("2024-01-01"), None, 30).is_err());
        assert!(DateRange::parse(None, Some("2024-01-01"), 30).is_err());
        let err = DateRange::parse(Some("nope"), Some("2024-01-01"), 30).unwrap_err();
        assert_eq!(err.code(), "E007");
        assert_eq!(DateRange::parse(None, None, 14).unwrap().days(), 14);
    }
}
