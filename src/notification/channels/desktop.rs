//! 系统原生通知渠道 - macOS 用 osascript，Linux 用 notify-send

use crate::config::Platform;
use crate::infra::command::{CommandRunner, SystemRunner};
use crate::notification::channel::{NotificationChannel, SendResult};
use crate::notification::event::{NotificationIntent, Sound};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

pub const OSASCRIPT: &str = "osascript";
pub const NOTIFY_SEND: &str = "notify-send";

/// 系统原生通知渠道
pub struct DesktopChannel<R: CommandRunner = SystemRunner> {
    platform: Platform,
    runner: R,
}

impl DesktopChannel<SystemRunner> {
    pub fn system(platform: Platform) -> Self {
        Self::new(platform, SystemRunner)
    }
}

impl<R: CommandRunner> DesktopChannel<R> {
    pub fn new(platform: Platform, runner: R) -> Self {
        Self { platform, runner }
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    /// 按平台投递，任何失败都返回 false
    pub async fn dispatch(&self, title: &str, message: &str, sound: Option<Sound>) -> bool {
        match self.deliver(title, message, sound).await {
            Ok(result) => {
                debug!(channel = "desktop", ?result, "Desktop notification attempted");
                result.delivered()
            }
            Err(e) => {
                debug!(channel = "desktop", error = %e, "Desktop notification failed");
                false
            }
        }
    }

    async fn deliver(&self, title: &str, message: &str, sound: Option<Sound>) -> Result<SendResult> {
        let (program, args) = match &self.platform {
            Platform::MacOs => (
                OSASCRIPT,
                vec!["-e".to_string(), applescript(title, message, sound)],
            ),
            // notify-send 不支持音效
            Platform::Linux => (NOTIFY_SEND, vec![escape_quotes(title), escape_quotes(message)]),
            Platform::Other(_) => {
                return Ok(SendResult::skipped(format!(
                    "no native notifier for {}",
                    self.platform.as_str()
                )));
            }
        };

        if !self.runner.is_available(program) {
            return Ok(SendResult::skipped(format!("{} not found", program)));
        }

        if self.runner.run(program, &args).await? {
            Ok(SendResult::Sent)
        } else {
            Ok(SendResult::failed(format!("{} exited with failure", program)))
        }
    }
}

#[async_trait]
impl<R: CommandRunner> NotificationChannel for DesktopChannel<R> {
    fn name(&self) -> &str {
        "desktop"
    }

    async fn send(&self, intent: &NotificationIntent) -> Result<SendResult> {
        self.deliver(&intent.title, &intent.message, intent.sound).await
    }
}

/// 只转义双引号，不处理其他字符
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// 构造 `display notification` 脚本；没有音效时省略 `sound name`
pub fn applescript(title: &str, message: &str, sound: Option<Sound>) -> String {
    let mut script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape_quotes(message),
        escape_quotes(title)
    );
    if let Some(sound) = sound {
        script.push_str(&format!(" sound name \"{}\"", sound));
    }
    script
}
