//! 数据来源抽象层
//!
//! 核心逻辑只依赖这里的 trait，不关心数据从哪里、以什么缓存策略取回。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::analytics::{ClickEvent, ConversionEvent};
use crate::config::DataConfig;
use crate::errors::{AffilinkerError, Result};

/// 行数据来源
#[async_trait]
pub trait OfferSource: Send + Sync {
    /// 原始 offer 行，交给归一化处理
    async fn fetch_offers(&self) -> Result<Vec<Value>>;

    async fn fetch_clicks(&self) -> Result<Vec<ClickEvent>>;

    async fn fetch_conversions(&self) -> Result<Vec<ConversionEvent>>;

    /// 获取 source 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 从本地 JSON 文件读取
pub struct JsonFileSource {
    offers: PathBuf,
    clicks: PathBuf,
    conversions: PathBuf,
}

impl JsonFileSource {
    pub fn new(
        offers: impl Into<PathBuf>,
        clicks: impl Into<PathBuf>,
        conversions: impl Into<PathBuf>,
    ) -> Self {
        Self {
            offers: offers.into(),
            clicks: clicks.into(),
            conversions: conversions.into(),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(
            config.offers_path(),
            config.clicks_path(),
            config.conversions_path(),
        )
    }

    async fn read_array(path: &Path) -> Result<Vec<Value>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AffilinkerError::source_unavailable(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Array(rows) => Ok(rows),
            _ => Err(AffilinkerError::serialization(format!(
                "{} must contain a JSON array",
                path.display()
            ))),
        }
    }

    /// 事件文件可以缺失（还没有任何流量）
    async fn read_events<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            debug!("{} does not exist, no events loaded", path.display());
            return Ok(Vec::new());
        }
        let rows = Self::read_array(path).await?;
        Ok(parse_rows(rows, &path.display().to_string()))
    }
}

/// 逐行解析，畸形行记录警告后跳过
pub fn parse_rows<T: DeserializeOwned>(rows: Vec<Value>, origin: &str) -> Vec<T> {
    let total = rows.len();
    let parsed: Vec<T> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(idx, row)| match serde_json::from_value(row) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping malformed row #{} in {}: {}", idx, origin, e);
                None
            }
        })
        .collect();
    if parsed.len() < total {
        debug!("{}: kept {} of {} rows", origin, parsed.len(), total);
    }
    parsed
}

#[async_trait]
impl OfferSource for JsonFileSource {
    async fn fetch_offers(&self) -> Result<Vec<Value>> {
        Self::read_array(&self.offers).await
    }

    async fn fetch_clicks(&self) -> Result<Vec<ClickEvent>> {
        Self::read_events(&self.clicks).await
    }

    async fn fetch_conversions(&self) -> Result<Vec<ConversionEvent>> {
        Self::read_events(&self.conversions).await
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// 内存数据来源，用于测试和嵌入
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub offers: Vec<Value>,
    pub clicks: Vec<ClickEvent>,
    pub conversions: Vec<ConversionEvent>,
}

impl MemorySource {
    pub fn with_offers(offers: Vec<Value>) -> Self {
        Self {
            offers,
            ..Default::default()
        }
    }
}

#[async_trait]
impl OfferSource for MemorySource {
    async fn fetch_offers(&self) -> Result<Vec<Value>> {
        Ok(self.offers.clone())
    }

    async fn fetch_clicks(&self) -> Result<Vec<ClickEvent>> {
        Ok(self.clicks.clone())
    }

    async fn fetch_conversions(&self) -> Result<Vec<ConversionEvent>> {
        Ok(self.conversions.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
