//! Offer 过滤与佣金聚合
//!
//! - `normalizer`: 原始行 → [`Offer`]
//! - `filter`: 多字段过滤
//! - `commission`: 佣金区间与展示格式
//! - `country`: 国家旗帜/名称表

mod commission;
mod country;
mod filter;
mod models;
mod normalizer;

pub use commission::{CommissionRange, commission_range, format_commission};
pub use country::{CountryDisplay, country_info};
pub use filter::{FilterSpec, filter_offers};
pub use models::{CommissionType, GeoCommission, Offer, OfferStatus, WORLDWIDE};
pub use normalizer::{
    normalize, normalize_all, normalize_geo_commissions, normalize_geo_targets, parse_number,
    parse_optional_number,
};
