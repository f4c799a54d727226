//! Catalog Adapters - 目录文档来源实现

mod document;
mod fake_catalog_source;
mod file_catalog_source;
mod http_catalog_client;

use std::sync::Arc;

pub use document::{CatalogDocument, ChapterDto, WorkDto};
pub use fake_catalog_source::{FakeCatalogResponse, FakeCatalogSource};
pub use file_catalog_source::FileCatalogSource;
pub use http_catalog_client::*;

use crate::application::ports::{CatalogError, CatalogSourcePort};
use crate::config::CatalogConfig;

/// 根据配置选择来源：带 http(s) 协议的走 HTTP，其余按本地路径读取
pub fn catalog_source_from_config(
    config: &CatalogConfig,
) -> Result<Arc<dyn CatalogSourcePort>, CatalogError> {
    if config.is_remote() {
        let mut client_config = HttpCatalogClientConfig::new(config.source.clone());
        client_config.timeout_secs = config.timeout_secs;
        Ok(Arc::new(HttpCatalogClient::new(client_config)?))
    } else {
        Ok(Arc::new(FileCatalogSource::new(&config.source)))
    }
}
