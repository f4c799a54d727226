//! 应用层 - 视图状态机
//!
//! 包含：
//! - state: 视图状态（带数据的枚举）与翻页可用性
//! - events: 用户操作事件
//! - machine: 状态转换
//! - view_model: 各状态的渲染数据

mod events;
mod machine;
mod state;
mod view_model;

pub use events::ViewEvent;
pub use machine::ViewStateMachine;
pub use state::{NavigationFlags, ViewMode, ViewState};
pub use view_model::{
    CatalogView, ChapterEntry, ReaderView, SeriesDetailView, StandaloneDetailView, StatusBadge,
    ViewModel, WorkCard, APP_HEADING, APP_TAGLINE,
};
