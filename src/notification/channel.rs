//! 通知渠道 trait 定义

use super::event::NotificationIntent;
use anyhow::Result;
use async_trait::async_trait;

/// 发送结果
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// 发送成功
    Sent,
    /// 跳过（渠道不可用，应回退到下一个渠道）
    Skipped(String),
    /// 发送失败（执行出错或非零退出）
    Failed(String),
}

impl SendResult {
    pub fn skipped(reason: impl Into<String>) -> Self {
        SendResult::Skipped(reason.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        SendResult::Failed(reason.into())
    }

    /// 是否已送达
    pub fn delivered(&self) -> bool {
        matches!(self, SendResult::Sent)
    }
}

/// 通知渠道 trait
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 尝试投递一次，不重试
    async fn send(&self, intent: &NotificationIntent) -> Result<SendResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sent_is_delivered() {
        assert!(SendResult::Sent.delivered());
        assert!(!SendResult::skipped("unsupported terminal").delivered());
        assert!(!SendResult::failed("exit status 1").delivered());
    }
}
