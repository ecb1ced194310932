//! 多字段 Offer 过滤
//!
//! 所有条件之间为 AND 关系；某字段为空集合 / `None` 表示不约束该字段。
//! 过滤是纯函数，结果保持输入顺序。

use serde::{Deserialize, Serialize};

use super::models::{CommissionType, Offer, OfferStatus};

/// 过滤条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(alias = "niche")]
    pub niches: Vec<String>,
    pub payout_min: Option<f64>,
    pub payout_max: Option<f64>,
    pub offer_types: Vec<CommissionType>,
    pub geos: Vec<String>,
    pub traffic_types: Vec<String>,
    #[serde(alias = "statuses")]
    pub status: Vec<OfferStatus>,
}

impl FilterSpec {
    /// 没有任何生效条件
    pub fn is_empty(&self) -> bool {
        self.active_predicates() == 0
    }

    /// 生效条件的数量（用于 UI 上的计数徽标）
    pub fn active_predicates(&self) -> usize {
        [
            !self.niches.is_empty(),
            self.payout_min.is_some() || self.payout_max.is_some(),
            !self.offer_types.is_empty(),
            !self.geos.is_empty(),
            !self.traffic_types.is_empty(),
            !self.status.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// 判断单个 offer 是否满足全部条件
    pub fn matches(&self, offer: &Offer) -> bool {
        self.matches_niche(offer)
            && self.matches_payout(offer)
            && self.matches_offer_type(offer)
            && self.matches_geo(offer)
            && self.matches_traffic(offer)
            && self.matches_status(offer)
    }

    fn matches_niche(&self, offer: &Offer) -> bool {
        if self.niches.is_empty() {
            return true;
        }
        offer
            .niche
            .as_deref()
            .is_some_and(|niche| contains_ignore_case(&self.niches, niche))
    }

    fn matches_payout(&self, offer: &Offer) -> bool {
        // 缺失的佣金在归一化阶段已是 0
        let value = offer.payout_value();
        if let Some(min) = self.payout_min
            && value < min
        {
            return false;
        }
        if let Some(max) = self.payout_max
            && value > max
        {
            return false;
        }
        true
    }

    fn matches_offer_type(&self, offer: &Offer) -> bool {
        self.offer_types.is_empty() || self.offer_types.contains(&offer.commission_type)
    }

    fn matches_geo(&self, offer: &Offer) -> bool {
        if self.geos.is_empty() || offer.is_worldwide() {
            return true;
        }
        offer
            .geo_targets
            .iter()
            .any(|code| contains_ignore_case(&self.geos, code))
    }

    fn matches_traffic(&self, offer: &Offer) -> bool {
        if self.traffic_types.is_empty() {
            return true;
        }
        offer
            .allowed_traffic_sources
            .iter()
            .any(|source| contains_ignore_case(&self.traffic_types, source))
    }

    fn matches_status(&self, offer: &Offer) -> bool {
        self.status.is_empty() || self.status.contains(&offer.status)
    }
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    let needle = needle.trim();
    haystack.iter().any(|s| s.trim().eq_ignore_ascii_case(needle))
}

/// 返回满足条件的 offer（保持原始顺序）
pub fn filter_offers<'a>(offers: &'a [Offer], spec: &FilterSpec) -> Vec<&'a Offer> {
    if spec.is_empty() {
        return offers.iter().collect();
    }
    offers.iter().filter(|offer| spec.matches(offer)).collect()
}
