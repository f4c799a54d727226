//! Catalog Loader - 启动时加载一次作品目录
//!
//! 失败（网络错误或文档格式错误）只记录日志并返回空目录，不重试

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::application::ports::CatalogSourcePort;
use crate::domain::story::Catalog;

/// 目录加载器
pub struct CatalogLoader {
    source: Arc<dyn CatalogSourcePort>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self { source }
    }

    /// 获取目录；任何错误都降级为空目录
    pub async fn load(&self) -> Catalog {
        let source = self.source.describe();
        tracing::info!(source = %source, "Fetching story catalog");

        match self.source.fetch().await {
            Ok(catalog) => {
                tracing::info!(source = %source, works = catalog.len(), "Story catalog loaded");
                catalog
            }
            Err(e) => {
                tracing::error!(source = %source, error = %e, "Error fetching stories");
                Catalog::empty()
            }
        }
    }

    /// 在后台任务中加载，立即返回等待句柄
    ///
    /// 句柄被丢弃后（视图已销毁）迟到的结果直接丢弃
    pub fn spawn(self) -> PendingCatalog {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let catalog = self.load().await;
            if tx.send(catalog).is_err() {
                tracing::debug!("Catalog arrived after the view was closed, ignoring");
            }
        });

        PendingCatalog { rx }
    }
}

/// 尚未完成的目录加载
///
/// 作为 Future 等待，结果总是一个目录（加载任务异常退出时为空目录）
pub struct PendingCatalog {
    rx: oneshot::Receiver<Catalog>,
}

impl PendingCatalog {
    /// 已完成的加载（用于测试和预加载的目录）
    pub fn ready(catalog: Catalog) -> Self {
        let (tx, rx) = oneshot::channel();
        // 接收端仍在本函数内，发送不会失败
        let _ = tx.send(catalog);
        Self { rx }
    }
}

impl Future for PendingCatalog {
    type Output = Catalog;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|result| {
            result.unwrap_or_else(|_| {
                tracing::warn!("Catalog loader task ended without a result");
                Catalog::empty()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeCatalogSource;
    use serde_json::json;
    use std::time::Duration;

    fn fixture() -> serde_json::Value {
        json!({
            "stories": [
                {"id": 1, "name": "Test", "type": "series", "chapters": [
                    {"id": "c1", "chapterNumber": 1, "title": "Start", "content": "A"}
                ]},
                {"id": 2, "title": "Solo", "content": "Hello"}
            ]
        })
    }

    #[tokio::test]
    async fn test_load_success() {
        let source = Arc::new(FakeCatalogSource::document(fixture()));
        let loader = CatalogLoader::new(source.clone());

        let catalog = loader.load().await;
        assert_eq!(catalog.len(), 2);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty_catalog() {
        let source = Arc::new(FakeCatalogSource::failing("connection refused"));
        let catalog = CatalogLoader::new(source).load().await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_document_yields_empty_catalog() {
        let source = Arc::new(FakeCatalogSource::document(json!({"items": []})));
        let catalog = CatalogLoader::new(source).load().await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_spawned_load_settles_once() {
        let source = Arc::new(
            FakeCatalogSource::document(fixture()).with_delay(Duration::from_millis(20)),
        );
        let pending = CatalogLoader::new(source.clone()).spawn();

        let catalog = pending.await;
        assert_eq!(catalog.len(), 2);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_late_completion_after_drop_is_ignored() {
        let source = Arc::new(
            FakeCatalogSource::document(fixture()).with_delay(Duration::from_millis(20)),
        );
        let pending = CatalogLoader::new(source.clone()).spawn();
        drop(pending);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_ready_handle() {
        let catalog = PendingCatalog::ready(Catalog::empty()).await;
        assert!(catalog.is_empty());
    }
}
