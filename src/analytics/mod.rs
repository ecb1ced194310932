//! 点击/转化统计
//!
//! 事件由外部跳转基础设施写入，这里只做只读聚合。

mod models;
mod range;
mod series;

pub use models::{ClickEvent, ConversionEvent, DailyPoint};
pub use range::{DateRange, MAX_DEFAULT_DAYS};
pub use series::{DashboardTotals, build_daily_series, percent_change};
