//! 外部命令执行 - 探测并运行系统通知工具

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// 外部命令执行器
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// 命令是否在 PATH 中
    fn is_available(&self, program: &str) -> bool;

    /// 以参数向量执行命令（不经过 shell），返回是否成功退出
    async fn run(&self, program: &str, args: &[String]) -> Result<bool>;
}

/// 真实系统上的执行器
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    async fn run(&self, program: &str, args: &[String]) -> Result<bool> {
        // stdout 留给 OSC 9，子进程输出一律丢弃
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .with_context(|| format!("failed to spawn {}", program))?;

        debug!(program, code = ?status.code(), "External command finished");
        Ok(status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        assert!(!SystemRunner.is_available("gemini-notify-definitely-missing-tool"));
    }

    #[tokio::test]
    async fn test_run_missing_program_is_error() {
        let result = SystemRunner
            .run("gemini-notify-definitely-missing-tool", &[])
            .await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_reports_exit_status() {
        assert!(SystemRunner.run("true", &[]).await.unwrap());
        assert!(!SystemRunner.run("false", &[]).await.unwrap());
    }
}
