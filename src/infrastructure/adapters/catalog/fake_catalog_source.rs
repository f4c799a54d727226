//! Fake Catalog Source - 用于测试的目录来源
//!
//! 返回固定文档或固定错误，并记录调用次数

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::CatalogDocument;
use crate::application::ports::{CatalogError, CatalogSourcePort};
use crate::domain::story::Catalog;

/// 固定响应
#[derive(Debug, Clone)]
pub enum FakeCatalogResponse {
    /// 返回该 JSON 文档（仍经过正常解码）
    Document(Value),
    /// 以网络错误失败
    Failure(String),
}

/// Fake Catalog Source
pub struct FakeCatalogSource {
    response: FakeCatalogResponse,
    /// 模拟网络延迟
    delay: Option<Duration>,
    fetch_count: AtomicUsize,
}

impl FakeCatalogSource {
    pub fn new(response: FakeCatalogResponse) -> Self {
        Self {
            response,
            delay: None,
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn document(document: Value) -> Self {
        Self::new(FakeCatalogResponse::Document(document))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(FakeCatalogResponse::Failure(message.into()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// 已调用 fetch 的次数
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSourcePort for FakeCatalogSource {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.response {
            FakeCatalogResponse::Document(value) => {
                CatalogDocument::from_value(value.clone())?.into_catalog()
            }
            FakeCatalogResponse::Failure(message) => Err(CatalogError::Network(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}
