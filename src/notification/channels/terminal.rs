//! 终端渠道 - 通过 OSC 9 转义序列让终端模拟器弹出通知

use crate::notification::channel::{NotificationChannel, SendResult};
use crate::notification::event::NotificationIntent;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::debug;

/// 支持 OSC 9 的终端（小写子串匹配）
pub const SUPPORTED_TERMINALS: &[&str] = &[
    "ghostty",
    "iterm.app",
    "iterm2",
    "kitty",
    "vscode",
    "apple_terminal",
];

/// 终端渠道
///
/// OSC 9 只携带消息正文，标题不会被传输。
pub struct TerminalChannel<W: Write + Send = io::Stdout> {
    /// 小写后的 `TERM_PROGRAM`
    term_program: String,
    out: Mutex<W>,
}

impl TerminalChannel<io::Stdout> {
    pub fn stdout(term_program: Option<&str>) -> Self {
        Self::new(term_program, io::stdout())
    }
}

impl<W: Write + Send> TerminalChannel<W> {
    pub fn new(term_program: Option<&str>, out: W) -> Self {
        Self {
            term_program: term_program.unwrap_or_default().to_lowercase(),
            out: Mutex::new(out),
        }
    }

    /// 当前终端是否在白名单中
    pub fn is_supported(&self) -> bool {
        SUPPORTED_TERMINALS
            .iter()
            .any(|term| self.term_program.contains(term))
    }

    /// 支持时写出 OSC 9 并视为已送达；转义序列没有回执
    pub fn probe_and_send(&self, _title: &str, message: &str) -> bool {
        if !self.is_supported() {
            return false;
        }

        if let Err(e) = self.emit(message) {
            debug!(channel = "terminal", error = %e, "Failed to write OSC 9 sequence");
        }
        true
    }

    fn emit(&self, message: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow::anyhow!("terminal writer poisoned"))?;
        out.write_all(osc9_sequence(message).as_bytes())
            .context("write OSC 9")?;
        out.flush().context("flush OSC 9")?;
        Ok(())
    }

    /// 取回底层 writer
    #[cfg(test)]
    pub(crate) fn into_writer(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

/// `ESC ] 9 ; <message> BEL`
pub fn osc9_sequence(message: &str) -> String {
    format!("\x1b]9;{}\x07", message)
}

#[async_trait]
impl<W: Write + Send> NotificationChannel for TerminalChannel<W> {
    fn name(&self) -> &str {
        "terminal"
    }

    async fn send(&self, intent: &NotificationIntent) -> Result<SendResult> {
        if self.probe_and_send(&intent.title, &intent.message) {
            Ok(SendResult::Sent)
        } else {
            Ok(SendResult::skipped(format!(
                "terminal '{}' does not support OSC 9",
                self.term_program
            )))
        }
    }
}
