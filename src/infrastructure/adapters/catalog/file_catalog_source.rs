//! File Catalog Source - 从本地 JSON 文件读取目录文档

use async_trait::async_trait;
use std::path::PathBuf;

use super::CatalogDocument;
use crate::application::ports::{CatalogError, CatalogSourcePort};
use crate::domain::story::Catalog;

/// 本地文件目录来源
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSourcePort for FileCatalogSource {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Catalog file read");

        CatalogDocument::from_slice(&bytes)?.into_catalog()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
