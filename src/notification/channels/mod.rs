//! 具体渠道实现

pub mod desktop;
pub mod terminal;

pub use desktop::DesktopChannel;
pub use terminal::TerminalChannel;
