//! 查询编排
//!
//! 单个查询：主 Provider → 次 Provider → 合并 → 渲染。
//! 批量查询：按输入顺序逐个执行，单个地址失败不会中断批次。

use std::io::Write;

use futures_util::StreamExt;
use futures_util::stream;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::errors::{FetchError, Result};
use crate::interfaces::display;
use crate::services::geoip::{self, LookupRequest, ProviderRecord, SharedSource};
use crate::services::merge::{UnifiedRecord, merge};
use crate::structs::{Locale, OutputFormat};

/// 启动时确定、之后不变的查询选项
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub locale: Locale,
    pub output: OutputFormat,
    pub randomize_identity: bool,
    /// 批量查询同时进行的地址数，1 表示顺序执行
    pub concurrency: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            output: OutputFormat::Text,
            randomize_identity: false,
            concurrency: 1,
        }
    }
}

/// 单个地址的查询结果
#[derive(Debug)]
pub struct LookupOutcome {
    pub ip: String,
    pub primary_error: Option<FetchError>,
    pub secondary_error: Option<FetchError>,
    pub record: UnifiedRecord,
}

impl LookupOutcome {
    pub fn has_data(&self) -> bool {
        !self.record.is_empty()
    }
}

/// 批量查询统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub without_data: usize,
}

pub struct QueryOrchestrator {
    primary: SharedSource,
    secondary: SharedSource,
    options: QueryOptions,
}

impl QueryOrchestrator {
    /// 从配置构建，API 密钥缺失时直接返回配置错误
    pub fn from_config(config: &AppConfig, options: QueryOptions) -> Result<Self> {
        Self::build_with(config, options, |config, api_key| {
            geoip::build_sources(&config.providers, api_key, options.randomize_identity)
        })
    }

    /// 校验密钥后再调用 `make_sources` 创建 Provider
    ///
    /// 密钥缺失时 `make_sources` 不会被调用，也就不会有任何网络请求。
    pub fn build_with<F>(config: &AppConfig, options: QueryOptions, make_sources: F) -> Result<Self>
    where
        F: FnOnce(&AppConfig, &str) -> (SharedSource, SharedSource),
    {
        let api_key = config.require_api_key()?;
        let (primary, secondary) = make_sources(config, api_key);
        Ok(Self::new(primary, secondary, options))
    }

    pub fn new(primary: SharedSource, secondary: SharedSource, options: QueryOptions) -> Self {
        Self {
            primary,
            secondary,
            options: QueryOptions {
                concurrency: options.concurrency.max(1),
                ..options
            },
        }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// 依次请求两个 Provider 并合并
    pub async fn lookup(&self, ip: &str) -> LookupOutcome {
        let request = LookupRequest {
            ip,
            locale: self.options.locale,
        };

        let (primary, primary_error) = split(self.primary.fetch(&request).await);
        let (secondary, secondary_error) = split(self.secondary.fetch(&request).await);

        debug!(
            "Lookup {}: {}={}, {}={}",
            ip,
            self.primary.name(),
            status(&primary_error),
            self.secondary.name(),
            status(&secondary_error),
        );

        LookupOutcome {
            ip: ip.to_string(),
            primary_error,
            secondary_error,
            record: merge(&primary, &secondary),
        }
    }

    /// 渲染单个结果
    pub fn render(&self, outcome: &LookupOutcome) -> Result<String> {
        match self.options.output {
            OutputFormat::Text => Ok(display::render(&outcome.record, self.options.locale)),
            OutputFormat::Json => display::render_json(&outcome.ip, &outcome.record),
        }
    }

    /// 查询单个地址并输出
    pub async fn run_single<W: Write>(&self, ip: &str, out: &mut W) -> Result<LookupOutcome> {
        let outcome = self.lookup(ip).await;
        self.write_block(&outcome, out)?;
        Ok(outcome)
    }

    /// 批量查询，输出顺序与输入顺序一致
    pub async fn run_batch<W: Write>(&self, ips: &[String], out: &mut W) -> Result<BatchSummary> {
        info!(
            "Batch query: {} addresses, concurrency {}, locale {}",
            ips.len(),
            self.options.concurrency,
            self.options.locale.code()
        );

        let mut summary = BatchSummary::default();
        let mut outcomes = stream::iter(ips.iter())
            .map(|ip| self.lookup(ip))
            .buffered(self.options.concurrency);

        while let Some(outcome) = outcomes.next().await {
            summary.total += 1;
            if !outcome.has_data() {
                summary.without_data += 1;
            }
            self.write_block(&outcome, out)?;
        }

        info!(
            "Batch query finished: {} total, {} without data",
            summary.total, summary.without_data
        );
        Ok(summary)
    }

    /// 文本模式下有数据的结果前空一行，“无数据”行紧跟上一块输出
    fn write_block<W: Write>(&self, outcome: &LookupOutcome, out: &mut W) -> Result<()> {
        let text = self.render(outcome)?;
        if self.options.output == OutputFormat::Text && outcome.has_data() {
            writeln!(out)?;
        }
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// 失败的 Provider 贡献空记录
fn split(result: geoip::FetchResult) -> (ProviderRecord, Option<FetchError>) {
    match result {
        Ok(record) => (record, None),
        Err(e) => (ProviderRecord::empty(), Some(e)),
    }
}

fn status(error: &Option<FetchError>) -> String {
    match error {
        None => "ok".to_string(),
        Some(e) => format!("{:?}", e.kind()),
    }
}
