//! GeoIP Provider 抽象层
//!
//! 每个 Provider 返回自己形状的 JSON（[`ProviderRecord`]），
//! 失败时返回 [`FetchError`]，由调用方降级为空记录。

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::FetchError;
use crate::structs::Locale;

/// Provider 原始响应（顶层 JSON 对象）
///
/// 空对象即“空记录”。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderRecord(Map<String, Value>);

impl ProviderRecord {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从 JSON 值构造，非对象视为响应格式错误
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(FetchError::Malformed(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ProviderRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 一次查询的输入
#[derive(Debug, Clone, Copy)]
pub struct LookupRequest<'a> {
    /// 未校验的 IP 字符串，原样传给 Provider
    pub ip: &'a str,
    pub locale: Locale,
}

pub type FetchResult = Result<ProviderRecord, FetchError>;

/// GeoIP 查询 trait
#[async_trait]
pub trait GeoSource: Send + Sync {
    /// 查询单个 IP，失败不会 panic
    async fn fetch(&self, request: &LookupRequest<'_>) -> FetchResult;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;
}

pub type SharedSource = Arc<dyn GeoSource>;

/// 按状态码记录 Provider 失败
pub(crate) fn log_fetch_failure(provider: &str, ip: &str, err: &FetchError) {
    match err {
        FetchError::Unauthorized => {
            warn!("{}: HTTP 401 for {}, API key is invalid, check apiKey", provider, ip)
        }
        FetchError::Forbidden => {
            warn!("{}: HTTP 403 for {}, API key has no permission for this endpoint", provider, ip)
        }
        FetchError::RateLimited => {
            warn!("{}: HTTP 429 for {}, rate limit exceeded, try again later", provider, ip)
        }
        other => warn!("{}: request for {} failed: {}", provider, ip, other),
    }
}

/// 在阻塞线程池中执行同步 HTTP 请求
pub(crate) async fn run_blocking<F>(provider: &'static str, f: F) -> FetchResult
where
    F: FnOnce() -> FetchResult + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap_or_else(|e| {
        warn!("{}: spawn_blocking failed: {}", provider, e);
        Err(FetchError::Transport(e.to_string()))
    })
}

/// 读取响应体并解析为 [`ProviderRecord`]
pub(crate) fn parse_body(body: &str) -> FetchResult {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    ProviderRecord::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_object() {
        let record = parse_body(r#"{"ip":"8.8.8.8"}"#).unwrap();
        assert_eq!(record.get("ip"), Some(&json!("8.8.8.8")));
    }

    #[test]
    fn test_parse_body_not_json() {
        let err = parse_body("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_parse_body_array_is_malformed() {
        let err = parse_body("[1,2,3]").unwrap_err();
        assert_eq!(
            err,
            FetchError::Malformed("expected a JSON object, got array".to_string())
        );
    }

    #[test]
    fn test_empty_record() {
        assert!(ProviderRecord::empty().is_empty());
        assert!(parse_body("{}").unwrap().is_empty());
    }
}
