//! HTTP Catalog Client - 通过 HTTP 获取目录文档
//!
//! 实现 CatalogSourcePort trait
//!
//! GET {url}  ->  {"stories": [...]}

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::CatalogDocument;
use crate::application::ports::{CatalogError, CatalogSourcePort};
use crate::domain::story::Catalog;

/// HTTP 目录客户端配置
#[derive(Debug, Clone)]
pub struct HttpCatalogClientConfig {
    /// 目录文档 URL
    pub url: String,
    /// 请求超时时间（秒），None 表示不设超时
    pub timeout_secs: Option<u64>,
}

impl Default for HttpCatalogClientConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000/stories.json".to_string(),
            timeout_secs: None,
        }
    }
}

impl HttpCatalogClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// HTTP 目录客户端
pub struct HttpCatalogClient {
    client: Client,
    config: HttpCatalogClientConfig,
}

impl HttpCatalogClient {
    pub fn new(config: HttpCatalogClientConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CatalogSourcePort for HttpCatalogClient {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        tracing::debug!(url = %self.config.url, "Sending catalog request");

        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else if e.is_connect() {
                    CatalogError::Network(format!("Cannot connect to catalog host: {}", e))
                } else {
                    CatalogError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Service(format!("HTTP {}", status)));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::Network(format!("Failed to read catalog body: {}", e))
            }
        })?;

        tracing::debug!(url = %self.config.url, bytes = body.len(), "Catalog document received");

        CatalogDocument::from_slice(&body)?.into_catalog()
    }

    fn describe(&self) -> String {
        self.config.url.clone()
    }
}
