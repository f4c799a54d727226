//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CatalogSourcePort）
//! - catalog: 启动时加载一次目录
//! - viewer: 视图状态机与渲染数据
//! - error: 应用层错误定义

pub mod catalog;
pub mod error;
pub mod ports;
pub mod viewer;

// Re-exports
pub use catalog::{CatalogLoader, PendingCatalog};
pub use error::ApplicationError;
pub use ports::{CatalogError, CatalogSourcePort};
pub use viewer::{NavigationFlags, ViewEvent, ViewMode, ViewModel, ViewState, ViewStateMachine};
