//! Terminal Front-end - 行式终端界面
//!
//! - command: 输入解析
//! - renderer: 视图数据到纯文本
//! - session: 输入与目录加载的事件循环

mod command;
mod renderer;
mod session;

pub use command::Command;
pub use renderer::TextRenderer;
pub use session::{Flow, TerminalSession};
