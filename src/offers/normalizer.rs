//! Offer 归一化
//!
//! 把存储层取回的原始行（`serde_json::Value`）转换为 [`Offer`]。
//! 任何畸形输入都退化为最保守的解释（全球投放 / 0），从不返回错误，
//! 保证数据不完整的 offer 依然出现在列表中。

use serde_json::{Map, Value};
use tracing::debug;

use super::models::{CommissionType, GeoCommission, Offer, OfferStatus, WORLDWIDE};

/// `geo_targets` 在存储中的几种形态
#[derive(Debug)]
enum GeoTargetsInput<'a> {
    Absent,
    List(&'a [Value]),
    Keys(&'a Map<String, Value>),
    /// JSON 编码后的字符串，需要先解析
    Encoded(&'a str),
    Unsupported,
}

impl<'a> GeoTargetsInput<'a> {
    fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Array(items)) => Self::List(items),
            Some(Value::Object(map)) => Self::Keys(map),
            Some(Value::String(s)) => Self::Encoded(s),
            Some(_) => Self::Unsupported,
        }
    }
}

/// 归一化单条 offer 行
pub fn normalize(raw: &Value) -> Offer {
    let commission_type = raw
        .get("commission_type")
        .and_then(Value::as_str)
        .map(|s| s.parse().unwrap_or_default())
        .unwrap_or(CommissionType::Cpa);

    let status = raw
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<OfferStatus>().ok())
        .unwrap_or_default();

    Offer {
        id: id_string(raw.get("id")),
        name: opt_string(raw.get("name")).unwrap_or_default(),
        description: opt_string(raw.get("description")),
        destination_url: opt_string(raw.get("destination_url"))
            .or_else(|| opt_string(raw.get("url"))),
        niche: opt_string(raw.get("niche")),
        status,
        featured: raw
            .get("featured")
            .or_else(|| raw.get("is_featured"))
            .and_then(Value::as_bool)
            .unwrap_or(false),
        commission_type,
        commission_amount: parse_number(raw.get("commission_amount")),
        commission_percent: parse_number(raw.get("commission_percent")),
        geo_commissions: normalize_geo_commissions(raw.get("geo_commissions")),
        geo_targets: normalize_geo_targets(raw.get("geo_targets")),
        restricted_geos: normalize_code_list(raw.get("restricted_geos")),
        allowed_traffic_sources: normalize_string_list(raw.get("allowed_traffic_sources")),
    }
}

/// 批量归一化，保持输入顺序
pub fn normalize_all(rows: &[Value]) -> Vec<Offer> {
    rows.iter().map(normalize).collect()
}

/// 解析 `geo_targets` 为国家代码序列
///
/// 缺失、空对象、空数组、解析失败均返回 `["Worldwide"]`
pub fn normalize_geo_targets(value: Option<&Value>) -> Vec<String> {
    let codes = match GeoTargetsInput::classify(value) {
        GeoTargetsInput::Absent | GeoTargetsInput::Unsupported => Vec::new(),
        GeoTargetsInput::List(items) => codes_from_list(items),
        GeoTargetsInput::Keys(map) => codes_from_keys(map),
        GeoTargetsInput::Encoded(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => codes_from_list(&items),
            Ok(Value::Object(map)) => codes_from_keys(&map),
            Ok(_) => Vec::new(),
            Err(e) => {
                debug!("geo_targets is not valid JSON ({}), treating as worldwide", e);
                Vec::new()
            }
        },
    };

    if codes.is_empty() {
        vec![WORLDWIDE.to_string()]
    } else {
        codes
    }
}

fn codes_from_list(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(canonical_code)
        .collect()
}

fn codes_from_keys(map: &Map<String, Value>) -> Vec<String> {
    map.keys().filter_map(|k| canonical_code(k)).collect()
}

fn canonical_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.eq_ignore_ascii_case(WORLDWIDE) {
        Some(WORLDWIDE.to_string())
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// 解析 `geo_commissions` 为记录序列
///
/// 非对象条目、缺少国家代码的条目被丢弃；数值字段缺失或非数值时为 `None`
pub fn normalize_geo_commissions(value: Option<&Value>) -> Vec<GeoCommission> {
    let parsed;
    let items: &[Value] = match value {
        Some(Value::Array(items)) => items,
        Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => {
                parsed = items;
                &parsed
            }
            _ => {
                debug!("geo_commissions string is not a JSON array, ignoring");
                &[]
            }
        },
        _ => &[],
    };

    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let country = obj
                .get("country")
                .or_else(|| obj.get("country_code"))
                .and_then(Value::as_str)
                .and_then(canonical_code)?;
            Some(GeoCommission {
                country,
                commission_amount: parse_optional_number(obj.get("commission_amount")),
                commission_percent: parse_optional_number(obj.get("commission_percent")),
            })
        })
        .collect()
}

/// 安全数值解析：数字或数字字符串，否则为 0
pub fn parse_number(value: Option<&Value>) -> f64 {
    parse_optional_number(value).unwrap_or(0.0)
}

/// 同 [`parse_number`]，但保留"不是数值"这一信息
pub fn parse_optional_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn normalize_code_list(value: Option<&Value>) -> Vec<String> {
    normalize_string_list(value)
        .iter()
        .filter_map(|s| canonical_code(s))
        .collect()
}

fn normalize_string_list(value: Option<&Value>) -> Vec<String> {
    let collect = |items: &[Value]| -> Vec<String> {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    };

    match value {
        Some(Value::Array(items)) => collect(items),
        Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => collect(&items),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn id_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn opt_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
