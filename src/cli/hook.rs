//! Gemini CLI hook 入口
//!
//! 读取 stdin 上的事件 JSON 并投递通知。hook 永远不向宿主报告失败：
//! 输入无法解析时直接返回，不产生任何输出。

use crate::config::NotifyEnv;
use crate::notification::{EventPayload, NotificationDispatcher};
use tracing::debug;

/// 处理一次 hook 调用
pub async fn handle_hook(input: &str, env: &NotifyEnv) {
    let payload = match EventPayload::parse(input) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "Ignoring malformed hook payload");
            return;
        }
    };

    let dispatcher = NotificationDispatcher::from_env(env);
    dispatcher.run(&payload).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;

    #[tokio::test]
    async fn test_malformed_payload_is_ignored() {
        let env = NotifyEnv::new(Some("dumb".to_string()), Platform::Other("plan9".into()));
        handle_hook("not json", &env).await;
        handle_hook("", &env).await;
    }

    #[tokio::test]
    async fn test_unknown_event_without_channels_completes() {
        let env = NotifyEnv::new(None, Platform::Other("plan9".into()));
        handle_hook(r#"{"hook_event_name":"BeforeTool"}"#, &env).await;
    }
}
