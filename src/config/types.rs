//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 目录来源配置
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// 终端阅读器配置
    #[serde(default)]
    pub reader: ReaderConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 目录来源配置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// 目录文档 URL 或本地文件路径
    #[serde(default = "default_catalog_source")]
    pub source: String,

    /// 请求超时时间（秒），未设置表示不超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_catalog_source() -> String {
    "http://localhost:3000/stories.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    /// 来源是否为 HTTP(S) 地址
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}

/// 终端阅读器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    /// 正文折行宽度，0 表示不折行
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_wrap_width() -> usize {
    80
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.source, "http://localhost:3000/stories.json");
        assert_eq!(config.catalog.timeout_secs, None);
        assert_eq!(config.reader.wrap_width, 80);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_remote_detection() {
        let mut config = CatalogConfig::default();
        assert!(config.is_remote());

        config.source = "https://example.org/stories.json".to_string();
        assert!(config.is_remote());

        config.source = "./stories.json".to_string();
        assert!(!config.is_remote());
    }
}
