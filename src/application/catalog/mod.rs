//! 应用层 - 目录加载

mod loader;

pub use loader::{CatalogLoader, PendingCatalog};
