//! GeoIP 服务模块
//!
//! 两个互相独立的外部 Provider：
//! - ipgeolocation.io（主，需要 API 密钥，嵌套 JSON）
//! - ip-api.com（次，平铺 JSON，可随机 User-Agent）

mod primary;
mod provider;
mod secondary;
pub mod user_agent;

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::ProvidersConfig;

pub use primary::PrimaryProvider;
pub use provider::{FetchResult, GeoSource, LookupRequest, ProviderRecord, SharedSource};
pub use secondary::SecondaryProvider;

/// 根据配置创建两个 Provider
pub fn build_sources(
    providers: &ProvidersConfig,
    api_key: &str,
    randomize_identity: bool,
) -> (SharedSource, SharedSource) {
    debug!(
        "GeoIP: primary={} ({}s), secondary={} ({}s), random UA={}",
        providers.primary_url,
        providers.primary_timeout_secs,
        providers.secondary_url,
        providers.secondary_timeout_secs,
        randomize_identity
    );

    let primary = PrimaryProvider::new(
        &providers.primary_url,
        api_key,
        Duration::from_secs(providers.primary_timeout_secs),
    );
    let secondary = SecondaryProvider::new(
        &providers.secondary_url,
        Duration::from_secs(providers.secondary_timeout_secs),
        randomize_identity,
    );

    (Arc::new(primary), Arc::new(secondary))
}
