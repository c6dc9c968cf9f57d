//! 基础设施层 - 外部命令

pub mod command;

pub use command::{CommandRunner, SystemRunner};
