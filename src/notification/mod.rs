//! 通知层 - 事件分类与渠道回退链
//!
//! # 流程
//! 1. `EventPayload::parse` 解析 hook 输入
//! 2. `classify` 得到 `NotificationIntent`
//! 3. `NotificationDispatcher` 依次尝试终端 OSC 9、系统原生通知，第一个送达即停止
//!
//! # 使用示例
//! ```ignore
//! use gemini_notify::config::NotifyEnv;
//! use gemini_notify::notification::{EventPayload, NotificationDispatcher};
//!
//! let payload = EventPayload::parse(r#"{"hook_event_name":"AfterAgent"}"#)?;
//! let dispatcher = NotificationDispatcher::from_env(&NotifyEnv::from_env());
//! dispatcher.run(&payload).await;
//! ```

pub mod channel;
pub mod channels;
pub mod dispatcher;
pub mod event;
pub mod payload;

pub use channel::{NotificationChannel, SendResult};
pub use channels::{DesktopChannel, TerminalChannel};
pub use dispatcher::NotificationDispatcher;
pub use event::{classify, NotificationIntent, Sound};
pub use payload::EventPayload;
