//! Query mode
//!
//! Dispatches the parsed command line: version, self-update, local country,
//! single address or batch file.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::{AppConfig, LoggingConfig};
use crate::interfaces::display;
use crate::runtime::orchestrator::QueryOrchestrator;
use crate::services::geoip::{PrimaryProvider, ProviderRecord};
use crate::system::{logging, update};
use crate::utils::ip_list::read_ip_list;

/// 版本信息
pub fn version_line() -> String {
    format!("IPQuery version {}", env!("CARGO_PKG_VERSION"))
}

/// Run query mode
///
/// 1. 无任何动作时打印帮助并正常退出
/// 2. 版本信息和自更新不读取配置
/// 3. 其余动作先加载配置和日志，查询前校验 API 密钥
pub async fn run_query(cli: Cli) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout, update::update_from_git).await
}

async fn dispatch<W, U>(cli: Cli, stdout: &mut W, update: U) -> Result<()>
where
    W: Write,
    U: FnOnce() -> crate::errors::Result<String>,
{
    if !cli.has_action() {
        writeln!(stdout, "{}", Cli::usage())?;
        return Ok(());
    }

    if cli.version {
        writeln!(stdout, "{}", version_line())?;
        return Ok(());
    }

    if cli.update {
        // 配置文件损坏时也要能更新，日志使用默认设置
        let _guard = logging::init_logging(&LoggingConfig::default()).ok();
        let summary = update()?;
        writeln!(stdout, "{}", summary)?;
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    let _guard = logging::init_logging(&config.logging)?;

    let options = cli.query_options();

    if cli.local {
        let api_key = config.require_api_key()?;
        let primary = PrimaryProvider::new(
            &config.providers.primary_url,
            api_key,
            Duration::from_secs(config.providers.primary_timeout_secs),
        );
        let record = primary
            .fetch_local_country()
            .await
            .unwrap_or_else(|_| ProviderRecord::empty());
        write!(
            stdout,
            "{}",
            display::render_local_country(&record, options.locale)
        )?;
        return Ok(());
    }

    let orchestrator = QueryOrchestrator::from_config(&config, options)?;

    if let Some(ip) = cli.ipaddr.as_deref().filter(|s| !s.is_empty()) {
        let outcome = orchestrator.run_single(ip, stdout).await?;
        if !outcome.has_data() {
            warn!("No geolocation data for {}", ip);
        }
    } else if let Some(path) = cli.file.as_deref() {
        let ips = read_ip_list(path).with_context(|| format!("Batch query from {}", path))?;
        if ips.is_empty() {
            warn!("{} contains no addresses", path);
            return Ok(());
        }
        let summary = orchestrator.run_batch(&ips, stdout).await?;
        info!(
            "Queried {} addresses, {} without data",
            summary.total, summary.without_data
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IpQueryError;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ipquery").chain(args.iter().copied())).unwrap()
    }

    fn no_update() -> crate::errors::Result<String> {
        panic!("update must not run");
    }

    #[tokio::test]
    async fn test_update_ignores_broken_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_key: [unclosed\n").unwrap();
        let path = path.to_str().unwrap().to_string();

        let mut out = Vec::new();
        dispatch(cli(&["-u", "-c", &path]), &mut out, || {
            Ok("Already up to date.".to_string())
        })
        .await
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Already up to date.\n");
    }

    #[tokio::test]
    async fn test_update_failure_is_reported() {
        let mut out = Vec::new();
        let err = dispatch(cli(&["-u"]), &mut out, || {
            Err(IpQueryError::update("git command not found"))
        })
        .await
        .unwrap_err();

        let err = err.downcast_ref::<IpQueryError>().unwrap();
        assert!(matches!(err, IpQueryError::Update(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_version_needs_no_config() {
        let mut out = Vec::new();
        dispatch(cli(&["-v", "-c", "/definitely/missing.yaml"]), &mut out, no_update)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", version_line()));
    }

    #[tokio::test]
    async fn test_no_action_prints_usage() {
        let mut out = Vec::new();
        dispatch(cli(&[]), &mut out, no_update).await.unwrap();
        assert!(String::from_utf8(out).unwrap().contains("--lang"));
    }

    #[tokio::test]
    async fn test_query_with_missing_config_file_fails() {
        let mut out = Vec::new();
        let err = dispatch(
            cli(&["-a", "8.8.8.8", "-c", "/definitely/missing.yaml"]),
            &mut out,
            no_update,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<IpQueryError>(),
            Some(IpQueryError::Configuration(_))
        ));
    }
}
