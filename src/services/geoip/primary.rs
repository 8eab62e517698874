//! 主 Provider（ipgeolocation.io v2）
//!
//! 嵌套的 JSON 响应：`ip`、`location{...}`、`network.asn{...}`。
//! 需要 API 密钥，密钥缺失时根本不会构造该 Provider。

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;
use ureq::Agent;

use super::provider::{
    FetchResult, GeoSource, LookupRequest, log_fetch_failure, parse_body, run_blocking,
};

const PROVIDER_NAME: &str = "ipgeolocation";

/// 本机国家查询只取这一个字段
const LOCAL_COUNTRY_FIELDS: &str = "location.country_name";

pub struct PrimaryProvider {
    agent: Agent,
    endpoint: String,
    api_key: String,
}

impl PrimaryProvider {
    /// 创建主 Provider
    ///
    /// `timeout` 同时作为连接超时和等待响应的超时。
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_connect(Some(timeout))
            .timeout_recv_response(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn fetch_sync(
        agent: Agent,
        endpoint: String,
        query: Vec<(&'static str, String)>,
    ) -> FetchResult {
        let mut request = agent.get(&endpoint);
        for (key, value) in &query {
            request = request.query(*key, value);
        }
        let body = request.call()?.into_body().read_to_string()?;
        parse_body(&body)
    }

    /// 查询调用方自身 IP 所属国家（不传 ip 参数）
    pub async fn fetch_local_country(&self) -> FetchResult {
        let query = vec![
            ("apiKey", self.api_key.clone()),
            ("fields", LOCAL_COUNTRY_FIELDS.to_string()),
        ];
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();

        let result =
            run_blocking(PROVIDER_NAME, move || Self::fetch_sync(agent, endpoint, query)).await;
        if let Err(e) = &result {
            log_fetch_failure(PROVIDER_NAME, "local address", e);
        }
        result
    }
}

#[async_trait]
impl GeoSource for PrimaryProvider {
    async fn fetch(&self, request: &LookupRequest<'_>) -> FetchResult {
        let query = vec![
            ("apiKey", self.api_key.clone()),
            ("ip", request.ip.to_string()),
            ("lang", request.locale.api_lang().to_string()),
        ];
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();

        trace!("{}: requesting {} for {}", PROVIDER_NAME, endpoint, request.ip);
        let result =
            run_blocking(PROVIDER_NAME, move || Self::fetch_sync(agent, endpoint, query)).await;
        if let Err(e) = &result {
            log_fetch_failure(PROVIDER_NAME, request.ip, e);
        }
        result
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
