//! Offer 目录服务
//!
//! 串起 取数 → 归一化 → 过滤 → 佣金区间 这条链路，
//! CLI 和嵌入方都通过它访问 offer。

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use super::source::OfferSource;
use crate::config::DisplayConfig;
use crate::errors::{AffilinkerError, Result};
use crate::offers::{
    CommissionRange, CountryDisplay, FilterSpec, Offer, commission_range, country_info,
    filter_offers, format_commission, normalize_all,
};

/// 单个 offer 的展示视图
#[derive(Debug, Clone, Serialize)]
pub struct OfferView<'a> {
    pub offer: &'a Offer,
    pub commission: String,
    pub commission_range: Option<CommissionRange>,
    pub geos: Vec<CountryDisplay>,
    pub restricted: Vec<CountryDisplay>,
}

/// 已归一化的 offer 集合
#[derive(Debug, Clone, Default)]
pub struct OfferCatalog {
    offers: Vec<Offer>,
}

impl OfferCatalog {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    /// 从数据来源加载并归一化全部 offer
    pub async fn load(source: &dyn OfferSource) -> Result<Self> {
        let rows = source.fetch_offers().await?;
        let offers = normalize_all(&rows);
        info!(
            "Catalog: loaded {} offers from {} source",
            offers.len(),
            source.name()
        );
        Ok(Self { offers })
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// 按条件过滤，保持原始顺序
    pub fn search(&self, spec: &FilterSpec) -> Vec<&Offer> {
        let matched = filter_offers(&self.offers, spec);
        debug!(
            "Catalog: {} of {} offers matched {} active filters",
            matched.len(),
            self.offers.len(),
            spec.active_predicates()
        );
        matched
    }

    pub fn get(&self, id: &str) -> Result<&Offer> {
        self.offers
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| AffilinkerError::not_found(format!("Offer '{}' not found", id)))
    }

    pub fn featured(&self) -> Vec<&Offer> {
        self.offers.iter().filter(|o| o.featured).collect()
    }

    /// 可选的细分领域（排序、去重）
    pub fn available_niches(&self) -> Vec<String> {
        sorted_unique(self.offers.iter().filter_map(|o| o.niche.clone()))
    }

    /// 可选的国家代码（不含 Worldwide 哨兵）
    pub fn available_geos(&self) -> Vec<String> {
        sorted_unique(
            self.offers
                .iter()
                .filter(|o| !o.is_worldwide())
                .flat_map(|o| o.geo_targets.iter().cloned()),
        )
    }

    pub fn available_traffic_types(&self) -> Vec<String> {
        sorted_unique(
            self.offers
                .iter()
                .flat_map(|o| o.allowed_traffic_sources.iter().cloned()),
        )
    }

    /// 构建展示视图
    pub fn view<'a>(offer: &'a Offer, display: &DisplayConfig) -> OfferView<'a> {
        OfferView {
            offer,
            commission: format_commission(offer, display),
            commission_range: commission_range(offer),
            geos: offer.geo_targets.iter().map(|c| country_info(c)).collect(),
            restricted: offer
                .restricted_geos
                .iter()
                .map(|c| country_info(c))
                .collect(),
        }
    }
}

fn sorted_unique(values: impl Iterator<Item = String>) -> Vec<String> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
