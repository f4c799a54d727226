//! Catalog Source Port - 目录文档来源抽象
//!
//! 定义获取作品目录的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::story::Catalog;

/// 目录获取错误
///
/// 所有变体在加载器中的处理方式相同：记录日志，目录置空
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    Service(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Malformed catalog document: {0}")]
    Malformed(String),
}

/// Catalog Source Port
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    /// 获取并解码目录文档
    async fn fetch(&self) -> Result<Catalog, CatalogError>;

    /// 来源描述（用于日志）
    fn describe(&self) -> String;
}
