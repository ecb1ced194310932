use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "affilinker.toml";

/// 静态配置（从 TOML 和环境变量加载，启动时使用）
///
/// 包含：
/// - data: 数据文件位置
/// - logging: 日志配置
/// - display: 金额展示、仪表盘默认窗口
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：AFL，分隔符：__
    /// 示例：AFL__DATA__DIR=/var/lib/affilinker
    pub fn load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix("AFL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 数据文件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
    #[serde(default = "default_offers_file")]
    pub offers_file: String,
    #[serde(default = "default_clicks_file")]
    pub clicks_file: String,
    #[serde(default = "default_conversions_file")]
    pub conversions_file: String,
    #[serde(default = "default_applications_file")]
    pub applications_file: String,
}

impl DataConfig {
    pub fn offers_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.offers_file)
    }

    pub fn clicks_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.clicks_file)
    }

    pub fn conversions_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.conversions_file)
    }

    pub fn applications_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.applications_file)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 展示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    /// 仪表盘未指定日期时的默认天数
    #[serde(default = "default_dashboard_days")]
    pub dashboard_days: u32,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_offers_file() -> String {
    "offers.json".to_string()
}

fn default_clicks_file() -> String {
    "clicks.json".to_string()
}

fn default_conversions_file() -> String {
    "conversions.json".to_string()
}

fn default_applications_file() -> String {
    "applications.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> u32 {
    2
}

fn default_dashboard_days() -> u32 {
    30
}

// ============================================================
// Default implementations
// ============================================================

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            offers_file: default_offers_file(),
            clicks_file: default_clicks_file(),
            conversions_file: default_conversions_file(),
            applications_file: default_applications_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
            dashboard_days: default_dashboard_days(),
        }
    }
}
