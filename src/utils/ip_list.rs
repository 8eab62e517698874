//! 批量查询的 IP 列表读取

use std::path::Path;

use tracing::debug;

use crate::errors::{IpQueryError, Result};

/// 按行解析 IP 列表：去除首尾空白，跳过空行，保持原顺序
///
/// 不做格式校验，非法地址会原样交给 Provider。
pub fn parse_ip_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// 从文件读取 IP 列表
pub fn read_ip_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IpQueryError::file_operation(format!("IP list file not found: {}", path.display()))
        } else {
            IpQueryError::file_operation(format!(
                "Failed to read IP list {}: {}",
                path.display(),
                e
            ))
        }
    })?;

    let ips = parse_ip_list(&content);
    debug!("Read {} addresses from {}", ips.len(), path.display());
    Ok(ips)
}
