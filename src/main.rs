//! Gemini Notify hook
//!
//! 从 stdin 读取一个 Gemini CLI hook 事件，依次尝试终端 OSC 9 和系统原生通知。

use anyhow::Result;
use gemini_notify::{cli::handle_hook, NotifyEnv};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // 日志只写 stderr，stdout 留给 OSC 9
    // 通过 RUST_LOG 控制日志级别，默认静默，例如: RUST_LOG=gemini_notify=debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gemini_notify=warn"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    // hook 通过 stdin 传递 JSON
    let input = std::io::read_to_string(std::io::stdin()).unwrap_or_default();
    handle_hook(&input, &NotifyEnv::from_env()).await;

    Ok(())
}
