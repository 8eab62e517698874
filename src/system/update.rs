//! 自更新：在当前目录执行 `git pull`

use std::process::Command;

use tracing::{error, info};

use crate::errors::{IpQueryError, Result};

/// 将本地仓库更新到最新版本
pub fn update_from_git() -> Result<String> {
    run_update(Command::new("git").arg("pull"))
}

fn run_update(command: &mut Command) -> Result<String> {
    let output = match command.output() {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error!("Git command not found, make sure git is installed and on PATH");
            return Err(IpQueryError::update("git command not found"));
        }
        Err(e) => {
            error!("Update failed: {}", e);
            return Err(IpQueryError::update(e.to_string()));
        }
    };

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        info!("Update succeeded: {}", stdout);
        Ok(stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        error!("Update failed: {}", stderr);
        Err(IpQueryError::update(stderr))
    }
}
