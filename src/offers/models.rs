//! Offer 领域模型
//!
//! 所有存储层的"松散"字段在归一化边界上被解析为这里的强类型，
//! 下游的过滤、佣金区间计算不再关心原始 JSON 的形状。

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// 无地域限制的哨兵值
pub const WORLDWIDE: &str = "Worldwide";

/// 佣金类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CommissionType {
    /// Cost per action
    #[default]
    Cpa,
    /// Cost per lead
    Cpl,
    /// Cost per sale
    Cps,
    /// Cost per install
    Cpi,
    /// 按收入比例分成
    RevShare,
    /// 未识别的类型，保留原始标签
    Other(String),
}

impl CommissionType {
    /// 是否按百分比计佣
    pub fn is_rev_share(&self) -> bool {
        matches!(self, Self::RevShare)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Cpa => "CPA",
            Self::Cpl => "CPL",
            Self::Cps => "CPS",
            Self::Cpi => "CPI",
            Self::RevShare => "RevShare",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for CommissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CommissionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let folded: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        Ok(match folded.as_str() {
            "" | "cpa" => Self::Cpa,
            "cpl" => Self::Cpl,
            "cps" => Self::Cps,
            "cpi" => Self::Cpi,
            "revshare" | "revenueshare" => Self::RevShare,
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

impl Serialize for CommissionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CommissionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // Infallible
        Ok(raw.parse().unwrap_or_default())
    }
}

/// Offer 状态
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Paused,
    Inactive,
    #[default]
    Pending,
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for OfferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(format!(
                "Invalid offer status: '{}'. Valid: active, paused, inactive, pending",
                s
            )),
        }
    }
}

/// 单个国家的佣金覆盖
///
/// 数值字段缺失或无法解析时为 `None`，区间计算据此跳过该条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCommission {
    pub country: String,
    #[serde(default)]
    pub commission_amount: Option<f64>,
    #[serde(default)]
    pub commission_percent: Option<f64>,
}

impl GeoCommission {
    /// 固定金额，非数值按 0 处理
    pub fn amount(&self) -> f64 {
        self.commission_amount.unwrap_or(0.0)
    }

    /// 百分比，非数值按 0 处理
    pub fn percent(&self) -> f64 {
        self.commission_percent.unwrap_or(0.0)
    }

    /// 按佣金类型取参与比较的数值；非数值返回 `None`
    pub fn value_for(&self, commission_type: &CommissionType) -> Option<f64> {
        if commission_type.is_rev_share() {
            self.commission_percent
        } else {
            self.commission_amount
        }
    }
}

/// 归一化后的 Offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub destination_url: Option<String>,
    pub niche: Option<String>,
    pub status: OfferStatus,
    pub featured: bool,
    pub commission_type: CommissionType,
    pub commission_amount: f64,
    pub commission_percent: f64,
    pub geo_commissions: Vec<GeoCommission>,
    /// 国家代码序列；无限制时为 `[WORLDWIDE]`
    pub geo_targets: Vec<String>,
    pub restricted_geos: Vec<String>,
    pub allowed_traffic_sources: Vec<String>,
}

impl Offer {
    /// 是否面向全球投放
    pub fn is_worldwide(&self) -> bool {
        self.geo_targets.is_empty()
            || self
                .geo_targets
                .iter()
                .any(|code| code.eq_ignore_ascii_case(WORLDWIDE))
    }

    /// 过滤和展示使用的单一佣金值：RevShare 取百分比，其余取固定金额
    pub fn payout_value(&self) -> f64 {
        if self.commission_type.is_rev_share() {
            self.commission_percent
        } else {
            self.commission_amount
        }
    }
}
