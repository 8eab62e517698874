//! Command-line interface definitions using clap
//!
//! Flags mirror the classic `ipquery` script: `-a` for a single address,
//! `-f` for a file of addresses, `-r` for random User-Agent, `-v`, `-u` and
//! `--lang 1..5`.

use clap::{CommandFactory, Parser};

use crate::runtime::orchestrator::QueryOptions;
use crate::structs::{Locale, OutputFormat};

/// IPQuery - 查看 IP 的归属地
#[derive(Parser, Debug)]
#[command(name = "ipquery")]
#[command(about = "查看IP的归属地", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// 输入查询IP
    #[arg(short = 'a', value_name = "IP")]
    pub ipaddr: Option<String>,

    /// 从文件中读取IP列表进行查询
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<String>,

    /// 启用随机User-Agent
    #[arg(short = 'r', long = "random-agent")]
    pub random_agent: bool,

    /// 显示脚本的版本信息
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// 更新脚本
    #[arg(short = 'u', long = "update")]
    pub update: bool,

    /// 查询本机 IP 所属国家
    #[arg(short = 'l', long = "local")]
    pub local: bool,

    /// 选择输出语言: 1-English, 2-中文, 3-日本語, 4-Español, 5-Deutsch（其他值使用英文）
    #[arg(long, default_value = "1")]
    pub lang: String,

    /// 配置文件路径（默认查找 ./config.yaml 或 ./config.toml）
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<String>,

    /// 以 JSON 输出结果（每个地址一行）
    #[arg(long)]
    pub json: bool,

    /// 批量查询时同时进行的地址数
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=32))]
    pub concurrency: u16,
}

impl Cli {
    /// 是否给出了任何可执行的动作
    pub fn has_action(&self) -> bool {
        self.ipaddr.as_deref().is_some_and(|s| !s.is_empty())
            || self.file.as_deref().is_some_and(|s| !s.is_empty())
            || self.version
            || self.update
            || self.local
    }

    pub fn locale(&self) -> Locale {
        Locale::from_selector(&self.lang)
    }

    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            locale: self.locale(),
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            randomize_identity: self.random_agent,
            concurrency: usize::from(self.concurrency),
        }
    }

    /// 帮助文本
    pub fn usage() -> String {
        Cli::command().render_help().to_string()
    }
}
