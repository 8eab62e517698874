use std::fmt;

#[derive(Debug, Clone)]
pub enum IpQueryError {
    Configuration(String),
    FileOperation(String),
    Serialization(String),
    Update(String),
}

impl IpQueryError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            IpQueryError::Configuration(_) => "E001",
            IpQueryError::FileOperation(_) => "E002",
            IpQueryError::Serialization(_) => "E003",
            IpQueryError::Update(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            IpQueryError::Configuration(_) => "Configuration Error",
            IpQueryError::FileOperation(_) => "File Operation Error",
            IpQueryError::Serialization(_) => "Serialization Error",
            IpQueryError::Update(_) => "Update Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            IpQueryError::Configuration(msg) => msg,
            IpQueryError::FileOperation(msg) => msg,
            IpQueryError::Serialization(msg) => msg,
            IpQueryError::Update(msg) => msg,
        }
    }

    /// 格式化为彩色输出（终端）
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for IpQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for IpQueryError {}

// 便捷的构造函数
impl IpQueryError {
    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        IpQueryError::Configuration(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        IpQueryError::FileOperation(msg.into())
    }

    pub fn update<T: Into<String>>(msg: T) -> Self {
        IpQueryError::Update(msg.into())
    }
}

impl From<std::io::Error> for IpQueryError {
    fn from(err: std::io::Error) -> Self {
        IpQueryError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for IpQueryError {
    fn from(err: serde_json::Error) -> Self {
        IpQueryError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for IpQueryError {
    fn from(err: config::ConfigError) -> Self {
        IpQueryError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IpQueryError>;

/// Provider 失败的粗粒度分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Auth,
    RateLimit,
    MalformedResponse,
}

/// 单个 Provider 请求失败的原因
///
/// 失败只影响该 Provider 的贡献（视为空记录），不会中断查询。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Transport(String),
    Timeout,
    /// HTTP 401
    Unauthorized,
    /// HTTP 403
    Forbidden,
    /// HTTP 429
    RateLimited,
    HttpStatus(u16),
    Malformed(String),
    /// Provider 在响应体中声明失败（例如 `{"status":"fail"}`）
    Rejected(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) | FetchError::Timeout | FetchError::HttpStatus(_) => {
                FetchErrorKind::Transport
            }
            FetchError::Unauthorized | FetchError::Forbidden => FetchErrorKind::Auth,
            FetchError::RateLimited => FetchErrorKind::RateLimit,
            FetchError::Malformed(_) | FetchError::Rejected(_) => {
                FetchErrorKind::MalformedResponse
            }
        }
    }

    /// 按 HTTP 状态码分类
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => FetchError::Unauthorized,
            403 => FetchError::Forbidden,
            429 => FetchError::RateLimited,
            other => FetchError::HttpStatus(other),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport error: {}", msg),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Unauthorized => write!(f, "HTTP 401: API key is invalid"),
            FetchError::Forbidden => write!(f, "HTTP 403: API key has no access to this endpoint"),
            FetchError::RateLimited => write!(f, "HTTP 429: request rate limit exceeded"),
            FetchError::HttpStatus(code) => write!(f, "HTTP {}: request failed", code),
            FetchError::Malformed(msg) => write!(f, "malformed response: {}", msg),
            FetchError::Rejected(msg) => write!(f, "provider rejected query: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => FetchError::from_status(code),
            ureq::Error::Timeout(_) => FetchError::Timeout,
            ureq::Error::Json(e) => FetchError::Malformed(e.to_string()),
            other => FetchError::Transport(other.to_string()),
        }
    }
}
