//! 申请记录存储
//!
//! (affiliate, offer) 唯一性在存储层保证：重复申请直接返回 `Conflict`，
//! 调用方的"是否已申请"预检查只是优化。

use std::path::Path;

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};
use uuid::Uuid;

use super::models::{AffiliateOffer, ApplicationStatus};
use crate::errors::{AffilinkerError, Result};

type PairKey = (String, String);

#[derive(Debug, Default)]
pub struct ApplicationBook {
    records: DashMap<Uuid, AffiliateOffer>,
    by_pair: DashMap<PairKey, Uuid>,
}

impl ApplicationBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 提交申请
    pub fn apply(
        &self,
        affiliate_id: &str,
        offer_id: &str,
        traffic_source: Option<String>,
        notes: Option<String>,
    ) -> Result<AffiliateOffer> {
        let affiliate_id = affiliate_id.trim();
        let offer_id = offer_id.trim();
        if affiliate_id.is_empty() || offer_id.is_empty() {
            return Err(AffilinkerError::validation(
                "affiliate_id and offer_id must not be empty",
            ));
        }

        let record = AffiliateOffer::new(affiliate_id, offer_id, traffic_source, notes);
        self.insert_unique(record.clone())?;

        info!(
            "Application {} created: affiliate={} offer={}",
            record.id, record.affiliate_id, record.offer_id
        );
        Ok(record)
    }

    fn insert_unique(&self, record: AffiliateOffer) -> Result<()> {
        let key = (record.affiliate_id.clone(), record.offer_id.clone());
        match self.by_pair.entry(key) {
            Entry::Occupied(existing) => Err(AffilinkerError::conflict(format!(
                "Affiliate '{}' already applied to offer '{}' (application {})",
                record.affiliate_id,
                record.offer_id,
                existing.get()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record.id);
                self.records.insert(record.id, record);
                Ok(())
            }
        }
    }

    /// 批准申请
    pub fn approve(&self, id: Uuid) -> Result<AffiliateOffer> {
        self.review(id, ApplicationStatus::Approved)
    }

    /// 拒绝申请
    pub fn reject(&self, id: Uuid) -> Result<AffiliateOffer> {
        self.review(id, ApplicationStatus::Rejected)
    }

    /// 审核只能从待审核状态开始，已审核的记录不可再改
    fn review(&self, id: Uuid, decision: ApplicationStatus) -> Result<AffiliateOffer> {
        let mut record = self
            .records
            .get_mut(&id)
            .ok_or_else(|| AffilinkerError::not_found(format!("Application {} not found", id)))?;

        if !record.is_pending() {
            return Err(AffilinkerError::invalid_state(format!(
                "Application {} is already {} and cannot be {}",
                id, record.status, decision
            )));
        }

        record.status = decision;
        record.reviewed_at = Some(Utc::now());
        debug!("Application {} reviewed: {}", id, decision);
        Ok(record.value().clone())
    }

    /// 撤回申请（仅限待审核状态），记录被删除
    pub fn cancel(&self, id: Uuid) -> Result<AffiliateOffer> {
        let status = self
            .records
            .get(&id)
            .map(|r| r.status)
            .ok_or_else(|| AffilinkerError::not_found(format!("Application {} not found", id)))?;

        if status != ApplicationStatus::Pending {
            return Err(AffilinkerError::invalid_state(format!(
                "Application {} is {} and can no longer be cancelled",
                id, status
            )));
        }

        let (_, record) = self
            .records
            .remove_if(&id, |_, r| r.is_pending())
            .ok_or_else(|| {
                AffilinkerError::invalid_state(format!(
                    "Application {} was reviewed while cancelling",
                    id
                ))
            })?;
        self.by_pair
            .remove(&(record.affiliate_id.clone(), record.offer_id.clone()));

        info!("Application {} cancelled", id);
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> Option<AffiliateOffer> {
        self.records.get(&id).map(|r| r.value().clone())
    }

    /// 该 affiliate 是否已申请过该 offer
    pub fn has_applied(&self, affiliate_id: &str, offer_id: &str) -> bool {
        self.by_pair
            .contains_key(&(affiliate_id.to_string(), offer_id.to_string()))
    }

    /// 某个 affiliate 的全部申请，按申请时间排序
    pub fn for_affiliate(&self, affiliate_id: &str) -> Vec<AffiliateOffer> {
        self.collect_sorted(|r| r.affiliate_id == affiliate_id)
    }

    /// 某个 offer 收到的全部申请，按申请时间排序
    pub fn for_offer(&self, offer_id: &str) -> Vec<AffiliateOffer> {
        self.collect_sorted(|r| r.offer_id == offer_id)
    }

    pub fn all(&self) -> Vec<AffiliateOffer> {
        self.collect_sorted(|_| true)
    }

    /// 已批准可推广的 offer ID
    pub fn approved_offer_ids(&self, affiliate_id: &str) -> Vec<String> {
        self.for_affiliate(affiliate_id)
            .into_iter()
            .filter(|r| r.status == ApplicationStatus::Approved)
            .map(|r| r.offer_id)
            .collect()
    }

    fn collect_sorted<F>(&self, predicate: F) -> Vec<AffiliateOffer>
    where
        F: Fn(&AffiliateOffer) -> bool,
    {
        let mut out: Vec<AffiliateOffer> = self
            .records
            .iter()
            .filter(|r| predicate(r.value()))
            .map(|r| r.value().clone())
            .collect();
        out.sort_by(|a, b| a.applied_at.cmp(&b.applied_at).then(a.id.cmp(&b.id)));
        out
    }

    /// 从 JSON 文件恢复；文件不存在时返回空记录
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let book = Self::new();
        if !path.exists() {
            debug!("Application file {} not found, starting empty", path.display());
            return Ok(book);
        }

        let content = std::fs::read_to_string(path)?;
        let records: Vec<AffiliateOffer> = serde_json::from_str(&content)?;
        for record in records {
            book.insert_unique(record)?;
        }
        debug!(
            "Loaded {} applications from {}",
            book.len(),
            path.display()
        );
        Ok(book)
    }

    /// 保存到 JSON 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.all())?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
