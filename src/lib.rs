//! Gemini Notify - 将 Gemini CLI hook 事件转为终端或桌面通知

pub mod cli;
pub mod config;
pub mod infra;
pub mod notification;

pub use config::{NotifyEnv, Platform};
pub use infra::{CommandRunner, SystemRunner};
pub use notification::{
    classify, DesktopChannel, EventPayload, NotificationChannel, NotificationDispatcher,
    NotificationIntent, SendResult, Sound, TerminalChannel,
};
