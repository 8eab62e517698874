use serde::{Deserialize, Serialize};

/// 应用配置（启动时加载一次，之后只读）
///
/// 包含：
/// - api_key: 主 Provider（ipgeolocation.io）的 API 密钥
/// - providers: Provider 地址和超时
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 取出可用的 API 密钥
    ///
    /// 空白密钥视为未配置。
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        if key.is_empty() { None } else { Some(key) }
    }
}

/// Provider 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// 主 Provider 端点（查询参数 apiKey/ip/lang）
    #[serde(default = "default_primary_url")]
    pub primary_url: String,
    /// 次 Provider URL 模板，`{ip}` 为占位符
    #[serde(default = "default_secondary_url")]
    pub secondary_url: String,
    #[serde(default = "default_primary_timeout_secs")]
    pub primary_timeout_secs: u64,
    #[serde(default = "default_secondary_timeout_secs")]
    pub secondary_timeout_secs: u64,
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
}

// ============================================================
// Default value functions
// ============================================================

fn default_primary_url() -> String {
    "https://api.ipgeolocation.io/v2/ipgeo".to_string()
}

fn default_secondary_url() -> String {
    "http://ip-api.com/json/{ip}?lang=zh-CN".to_string()
}

fn default_primary_timeout_secs() -> u64 {
    10
}

fn default_secondary_timeout_secs() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            primary_url: default_primary_url(),
            secondary_url: default_secondary_url(),
            primary_timeout_secs: default_primary_timeout_secs(),
            secondary_timeout_secs: default_secondary_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}
