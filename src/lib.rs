//! Story Haven - 故事目录阅读器
//!
//! 架构设计: 分层 + 六边形架构
//!
//! 领域层 (domain/):
//! - Story Context: 作品、章节、只读目录、字段规范化
//!
//! 应用层 (application/):
//! - Ports: CatalogSourcePort
//! - Catalog: 启动时加载一次目录
//! - Viewer: 视图状态机与渲染数据
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP / 本地文件目录来源
//! - Terminal: 行式终端前端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
