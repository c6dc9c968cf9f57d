//! 事件分类 - 将 hook payload 映射为通知意图 (title, message, sound)

use super::payload::{render_field, EventPayload};

/// 通知标题
pub const TITLE: &str = "Gemini CLI";
/// 未知事件的标题
pub const UNKNOWN_EVENT_TITLE: &str = "Gemini CLI | Unknown event";
/// AfterAgent 没有消息时的默认文案
pub const TASK_FINISHED: &str = "Task Finished!";
/// ToolPermission 没有消息时的默认文案
pub const PERMISSION_NEEDED: &str = "Gemini needs permission to run a tool.";

/// macOS 通知音效
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Glass,
    Hero,
}

impl Sound {
    /// macOS 系统音效名
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Glass => "Glass",
            Sound::Hero => "Hero",
        }
    }
}

impl std::fmt::Display for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 通知意图 - 由分类器产生，各渠道只读使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationIntent {
    pub title: String,
    pub message: String,
    pub sound: Option<Sound>,
}

impl NotificationIntent {
    pub fn new(title: impl Into<String>, message: impl Into<String>, sound: Option<Sound>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            sound,
        }
    }
}

/// 将 hook 事件分类为通知意图，永不失败
pub fn classify(payload: &EventPayload) -> NotificationIntent {
    match (payload.hook_event_name(), payload.notification_type()) {
        (Some("AfterAgent"), _) => NotificationIntent::new(
            TITLE,
            payload
                .display_message()
                .unwrap_or_else(|| TASK_FINISHED.to_string()),
            Some(Sound::Glass),
        ),
        (Some("Notification"), Some("ToolPermission")) => NotificationIntent::new(
            TITLE,
            payload
                .display_message()
                .unwrap_or_else(|| PERMISSION_NEEDED.to_string()),
            Some(Sound::Hero),
        ),
        _ => NotificationIntent::new(UNKNOWN_EVENT_TITLE, describe_unknown(payload), None),
    }
}

/// 未知事件的诊断文本，原样带出三个字段
fn describe_unknown(payload: &EventPayload) -> String {
    format!(
        "eventName: {} data.notification_type: {} data.message: {}",
        render_field(&payload.hook_event_name),
        render_field(&payload.notification_type),
        render_field(&payload.message),
    )
}
