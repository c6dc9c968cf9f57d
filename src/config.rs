//! 运行环境快照 - 没有配置文件，所有输入都来自进程环境

use std::env;

/// 终端识别环境变量
pub const TERM_PROGRAM_VAR: &str = "TERM_PROGRAM";

/// 宿主操作系统
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Other(String),
}

impl Platform {
    /// 从系统标识解析（接受 `macos` 和 `darwin`）
    pub fn from_os(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "macos" | "darwin" => Platform::MacOs,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    /// 当前编译目标的平台
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::MacOs => "darwin",
            Platform::Linux => "linux",
            Platform::Other(os) => os,
        }
    }
}

/// 通知相关的环境信息，进程启动时读取一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyEnv {
    /// `TERM_PROGRAM` 的原始值
    pub term_program: Option<String>,
    pub platform: Platform,
}

impl NotifyEnv {
    pub fn new(term_program: Option<String>, platform: Platform) -> Self {
        Self {
            term_program,
            platform,
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::var(TERM_PROGRAM_VAR).ok(), Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_os() {
        assert_eq!(Platform::from_os("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("Linux"), Platform::Linux);
        assert_eq!(
            Platform::from_os("windows"),
            Platform::Other("windows".to_string())
        );
    }

    #[test]
    fn test_platform_as_str() {
        assert_eq!(Platform::MacOs.as_str(), "darwin");
        assert_eq!(Platform::Linux.as_str(), "linux");
        assert_eq!(Platform::Other("freebsd".into()).as_str(), "freebsd");
    }

    #[test]
    fn test_current_platform_matches_target() {
        let platform = Platform::current();
        if cfg!(target_os = "macos") {
            assert_eq!(platform, Platform::MacOs);
        } else if cfg!(target_os = "linux") {
            assert_eq!(platform, Platform::Linux);
        } else {
            assert!(matches!(platform, Platform::Other(_)));
        }
    }
}
