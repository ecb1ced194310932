use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};
use uuid::Uuid;

/// 申请状态
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// 推广申请：一个 affiliate 对一个 offer 的申请记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateOffer {
    pub id: Uuid,
    pub affiliate_id: String,
    pub offer_id: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub traffic_source: Option<String>,
    pub notes: Option<String>,
}

impl AffiliateOffer {
    pub fn new(
        affiliate_id: impl Into<String>,
        offer_id: impl Into<String>,
        traffic_source: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            affiliate_id: affiliate_id.into(),
            offer_id: offer_id.into(),
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
            reviewed_at: None,
            traffic_source: traffic_source.filter(|s| !s.trim().is_empty()),
            notes: notes.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}
