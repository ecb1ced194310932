use std::fmt;

#[derive(Debug, Clone)]
pub enum AffilinkerError {
    FileOperation(String),
    Serialization(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    InvalidState(String),
    DateParse(String),
    SourceUnavailable(String),
    Config(String),
}

impl AffilinkerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AffilinkerError::FileOperation(_) => "E001",
            AffilinkerError::Serialization(_) => "E002",
            AffilinkerError::Validation(_) => "E003",
            AffilinkerError::NotFound(_) => "E004",
            AffilinkerError::Conflict(_) => "E005",
            AffilinkerError::InvalidState(_) => "E006",
            AffilinkerError::DateParse(_) => "E007",
            AffilinkerError::SourceUnavailable(_) => "E008",
            AffilinkerError::Config(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AffilinkerError::FileOperation(_) => "File Operation Error",
            AffilinkerError::Serialization(_) => "Serialization Error",
            AffilinkerError::Validation(_) => "Validation Error",
            AffilinkerError::NotFound(_) => "Resource Not Found",
            AffilinkerError::Conflict(_) => "Resource Conflict",
            AffilinkerError::InvalidState(_) => "Invalid State Transition",
            AffilinkerError::DateParse(_) => "Date Parse Error",
            AffilinkerError::SourceUnavailable(_) => "Data Source Unavailable",
            AffilinkerError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AffilinkerError::FileOperation(msg)
            | AffilinkerError::Serialization(msg)
            | AffilinkerError::Validation(msg)
            | AffilinkerError::NotFound(msg)
            | AffilinkerError::Conflict(msg)
            | AffilinkerError::InvalidState(msg)
            | AffilinkerError::DateParse(msg)
            | AffilinkerError::SourceUnavailable(msg)
            | AffilinkerError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于日志和 JSON 输出）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AffilinkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AffilinkerError {}

// 便捷的构造函数
impl AffilinkerError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::Serialization(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::Conflict(msg.into())
    }

    pub fn invalid_state<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::InvalidState(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::DateParse(msg.into())
    }

    pub fn source_unavailable<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::SourceUnavailable(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        AffilinkerError::Config(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for AffilinkerError {
    fn from(err: std::io::Error) -> Self {
        AffilinkerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AffilinkerError {
    fn from(err: serde_json::Error) -> Self {
        AffilinkerError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AffilinkerError {
    fn from(err: chrono::ParseError) -> Self {
        AffilinkerError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for AffilinkerError {
    fn from(err: config::ConfigError) -> Self {
        AffilinkerError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AffilinkerError {
    fn from(err: toml::ser::Error) -> Self {
        AffilinkerError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AffilinkerError>;
