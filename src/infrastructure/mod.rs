//! Infrastructure Layer - 基础设施层
//!
//! 提供端口的具体实现与终端前端

pub mod adapters;
pub mod terminal;

pub use adapters::{catalog_source_from_config, FileCatalogSource, HttpCatalogClient};
pub use terminal::{TerminalSession, TextRenderer};
