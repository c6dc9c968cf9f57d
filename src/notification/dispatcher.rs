//! 通知分发器 - 按顺序尝试渠道，第一个送达即停止

use super::channel::{NotificationChannel, SendResult};
use super::channels::{DesktopChannel, TerminalChannel};
use super::event::{classify, NotificationIntent};
use super::payload::EventPayload;
use crate::config::NotifyEnv;
use tracing::{debug, info};

/// 通知分发器 - 持有有序的回退链
pub struct NotificationDispatcher {
    /// 按优先级排列的渠道
    channels: Vec<Box<dyn NotificationChannel>>,
}

impl NotificationDispatcher {
    /// 创建空的分发器
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// 默认回退链：终端 OSC 9 → 系统原生通知
    pub fn from_env(env: &NotifyEnv) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register_channel(Box::new(TerminalChannel::stdout(env.term_program.as_deref())));
        dispatcher.register_channel(Box::new(DesktopChannel::system(env.platform.clone())));
        dispatcher
    }

    /// 追加渠道到回退链末尾
    pub fn register_channel(&mut self, channel: Box<dyn NotificationChannel>) {
        debug!(channel = channel.name(), "Registering notification channel");
        self.channels.push(channel);
    }

    /// 分类并投递，返回送达的渠道名
    pub async fn run(&self, payload: &EventPayload) -> Option<&str> {
        let intent = classify(payload);
        debug!(title = %intent.title, sound = ?intent.sound, "Classified hook event");
        self.deliver(&intent).await
    }

    /// 依次尝试每个渠道，每个最多一次
    pub async fn deliver(&self, intent: &NotificationIntent) -> Option<&str> {
        for channel in &self.channels {
            let name = channel.name();
            let result = match channel.send(intent).await {
                Ok(r) => r,
                Err(e) => {
                    debug!(channel = name, error = %e, "Channel send failed");
                    SendResult::Failed(e.to_string())
                }
            };

            debug!(channel = name, ?result, "Channel attempted");
            if result.delivered() {
                info!(channel = name, "Notification delivered");
                return Some(name);
            }
        }

        info!("No channel delivered the notification");
        None
    }

    /// 获取已注册的渠道名称
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }
}

impl Default for NotificationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
