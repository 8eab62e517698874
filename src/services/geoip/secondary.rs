//! 次 Provider（ip-api.com）
//!
//! 平铺的 JSON 响应：`country`、`regionName`、`city`、`lat`、`lon`、`isp`、`query`。
//! 失败时在响应体里返回 `{"status": "fail", "message": ...}`。

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;
use ureq::Agent;

use super::provider::{
    FetchResult, GeoSource, LookupRequest, log_fetch_failure, parse_body, run_blocking,
};
use super::user_agent::random_user_agent;
use crate::errors::FetchError;

const PROVIDER_NAME: &str = "ip-api";

/// 次 Provider，不需要密钥
pub struct SecondaryProvider {
    agent: Agent,
    /// 使用 `{ip}` 作为占位符
    /// 例如: `http://ip-api.com/json/{ip}?lang=zh-CN`
    url_template: String,
    randomize_identity: bool,
}

impl SecondaryProvider {
    /// 创建次 Provider，`timeout` 为整个请求的上限
    pub fn new(url_template: &str, timeout: Duration, randomize_identity: bool) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            url_template: url_template.to_string(),
            randomize_identity,
        }
    }

    pub fn url_for(&self, ip: &str) -> String {
        self.url_template.replace("{ip}", ip)
    }

    /// 同步请求（在 spawn_blocking 中调用）
    fn fetch_sync(agent: Agent, url: String, user_agent: Option<&'static str>) -> FetchResult {
        let mut request = agent.get(&url);
        if let Some(ua) = user_agent {
            trace!("{}: using User-Agent {}", PROVIDER_NAME, ua);
            request = request.header("User-Agent", ua);
        }

        let body = request.call()?.into_body().read_to_string()?;
        let record = parse_body(&body)?;

        if record.get("status").and_then(|s| s.as_str()) == Some("fail") {
            let message = record
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown reason")
                .to_string();
            return Err(FetchError::Rejected(message));
        }

        Ok(record)
    }
}

#[async_trait]
impl GeoSource for SecondaryProvider {
    async fn fetch(&self, request: &LookupRequest<'_>) -> FetchResult {
        let url = self.url_for(request.ip);
        let user_agent = self.randomize_identity.then(random_user_agent);
        let agent = self.agent.clone();

        trace!("{}: requesting {}", PROVIDER_NAME, url);
        let result =
            run_blocking(PROVIDER_NAME, move || Self::fetch_sync(agent, url, user_agent)).await;
        if let Err(e) = &result {
            log_fetch_failure(PROVIDER_NAME, request.ip, e);
        }
        result
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_template_substitution() {
        let provider = SecondaryProvider::new(
            "http://ip-api.com/json/{ip}?lang=zh-CN",
            Duration::from_secs(15),
            false,
        );
        assert_eq!(
            provider.url_for("8.8.8.8"),
            "http://ip-api.com/json/8.8.8.8?lang=zh-CN"
        );
    }

    /// 依赖外部网络服务，CI 环境可能失败
    #[tokio::test]
    #[ignore]
    async fn test_secondary_provider_real() {
        let provider = SecondaryProvider::new(
            "http://ip-api.com/json/{ip}?lang=zh-CN",
            Duration::from_secs(15),
            true,
        );
        let record = provider
            .fetch(&LookupRequest {
                ip: "8.8.8.8",
                locale: Default::default(),
            })
            .await
            .unwrap();
        assert_eq!(record.get("query").and_then(|v| v.as_str()), Some("8.8.8.8"));
    }

    /// 私有地址 ip-api.com 返回 {"status":"fail",...}
    #[tokio::test]
    #[ignore]
    async fn test_secondary_provider_private_ip() {
        let provider = SecondaryProvider::new(
            "http://ip-api.com/json/{ip}",
            Duration::from_secs(15),
            false,
        );
        let err = provider
            .fetch(&LookupRequest {
                ip: "192.168.1.1",
                locale: Default::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Rejected(_)));
    }
}
