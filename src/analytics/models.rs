use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::offers::parse_number;

/// 点击事件（由跳转基础设施写入，只读）
///
/// 标识可以来自 `click_id` 或 `id`，两者都有时以 `click_id` 为准（转化按它关联）；
/// 都没有时为空串，此时点击照常计数，只是无法被转化关联。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ClickRow")]
pub struct ClickEvent {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub offer_id: Option<String>,
    pub affiliate_id: Option<String>,
    /// 国家代码 (ISO 3166-1 alpha-2)
    pub country: Option<String>,
}

impl ClickEvent {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
            offer_id: None,
            affiliate_id: None,
            country: None,
        }
    }
}

#[derive(Deserialize)]
struct ClickRow {
    #[serde(default, deserialize_with = "lenient_opt_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    click_id: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    offer_id: Option<String>,
    #[serde(default)]
    affiliate_id: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl From<ClickRow> for ClickEvent {
    fn from(row: ClickRow) -> Self {
        Self {
            id: row.click_id.or(row.id).unwrap_or_default(),
            created_at: row.created_at,
            offer_id: row.offer_id,
            affiliate_id: row.affiliate_id,
            country: row.country,
        }
    }
}

/// 转化事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionEvent {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    /// 关联的点击 ID；找不到对应点击的转化不进入日序列
    #[serde(default, deserialize_with = "lenient_opt_id")]
    pub click_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub commission: f64,
    #[serde(default = "default_event_type")]
    pub event_type: String,
}

impl ConversionEvent {
    pub fn new(
        click_id: Option<String>,
        created_at: DateTime<Utc>,
        revenue: f64,
        commission: f64,
    ) -> Self {
        Self {
            id: String::new(),
            click_id,
            created_at,
            revenue,
            commission,
            event_type: default_event_type(),
        }
    }
}

fn default_event_type() -> String {
    "conversion".to_string()
}

/// 日序列中的一个点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub commission: f64,
}

impl DailyPoint {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            clicks: 0,
            conversions: 0,
            revenue: 0.0,
            commission: 0.0,
        }
    }
}

// 数据库 numeric 列经常以字符串形式返回
fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(parse_number(Some(&value)))
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_opt_id(deserializer)?.unwrap_or_default())
}

fn lenient_opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_click_identifier_sources() {
        let keyed: ClickEvent = serde_json::from_value(json!({
            "click_id": "abc",
            "created_at": "2024-01-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(keyed.id, "abc");

        let both: ClickEvent = serde_json::from_value(json!({
            "id": 7,
            "click_id": "trk-7",
            "created_at": "2024-01-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(both.id, "trk-7");

        let bare: ClickEvent =
            serde_json::from_value(json!({"created_at": "2024-01-01T11:00:00Z"})).unwrap();
        assert_eq!(bare.id, "");
    }

    #[test]
    fn test_click_without_timestamp_rejected() {
        assert!(serde_json::from_value::<ClickEvent>(json!({"click_id": "abc"})).is_err());
    }
}
