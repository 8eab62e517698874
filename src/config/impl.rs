use std::path::Path;

use config::{Config, Environment, File, Map};
use tracing::debug;

use super::AppConfig;
use crate::errors::{IpQueryError, Result};

/// 默认配置文件名（不含扩展名，config.yaml / config.toml 均可）
pub const DEFAULT_CONFIG_BASENAME: &str = "config";

/// 环境变量前缀，例如 `IPQUERY__API_KEY`
pub const ENV_PREFIX: &str = "IPQUERY";

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// - 未指定路径时在当前目录查找 `config.*`，不存在则跳过
    /// - 指定路径时文件必须存在
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// 同 [`AppConfig::load`]，`env` 为 `Some` 时用给定的变量表代替进程环境变量
    ///
    /// 环境变量一律按字符串读取，数字样式的 API 密钥保持原样。
    pub fn load_with_env(path: Option<&str>, env: Option<Map<String, String>>) -> Result<Self> {
        let file_source = match path {
            Some(p) => File::from(Path::new(p)).required(true),
            None => File::with_name(DEFAULT_CONFIG_BASENAME).required(false),
        };

        let settings = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| IpQueryError::configuration(format!("Failed to build config: {}", e)))?;

        let config = settings.try_deserialize::<AppConfig>().map_err(|e| {
            IpQueryError::configuration(format!("Failed to deserialize config: {}", e))
        })?;

        debug!(
            "Configuration loaded (file: {}, api_key set: {})",
            path.unwrap_or(DEFAULT_CONFIG_BASENAME),
            config.api_key().is_some()
        );
        Ok(config)
    }

    /// 校验查询前置条件，返回 API 密钥
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key().ok_or_else(|| {
            IpQueryError::configuration(
                "No valid API key found, please set api_key in config.yaml",
            )
        })
    }
}
