//! 按国家佣金覆盖计算佣金区间

use serde::Serialize;

use super::models::Offer;
use crate::config::DisplayConfig;

/// 佣金区间（不做取整，格式化交给展示层）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommissionRange {
    pub min: f64,
    pub max: f64,
}

/// 计算 offer 在各国家覆盖上的佣金区间
///
/// 非数值的覆盖条目不参与比较。覆盖少于 2 条、或没有可用数值时返回 `None`，
/// 调用方应展示单一佣金值。
pub fn commission_range(offer: &Offer) -> Option<CommissionRange> {
    if offer.geo_commissions.len() < 2 {
        return None;
    }

    offer
        .geo_commissions
        .iter()
        .filter_map(|gc| gc.value_for(&offer.commission_type))
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<CommissionRange>, v| {
            Some(match acc {
                None => CommissionRange { min: v, max: v },
                Some(r) => CommissionRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            })
        })
}

/// 把佣金格式化为展示字符串，例如 `$12.00`、`25%`、`15% - 25%`
pub fn format_commission(offer: &Offer, display: &DisplayConfig) -> String {
    let fmt_value = |v: f64| -> String {
        if offer.commission_type.is_rev_share() {
            format!("{}%", trim_number(v, display.decimals))
        } else {
            format!(
                "{}{:.*}",
                display.currency_symbol,
                display.decimals as usize,
                v
            )
        }
    };

    match commission_range(offer) {
        Some(range) if range.min != range.max => {
            format!("{} - {}", fmt_value(range.min), fmt_value(range.max))
        }
        Some(range) => fmt_value(range.min),
        None => fmt_value(offer.payout_value()),
    }
}

// 百分比去掉无意义的小数位：25.00 -> 25，12.50 -> 12.5
fn trim_number(v: f64, decimals: u32) -> String {
    let s = format!("{:.*}", decimals as usize, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
