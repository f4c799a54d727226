//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（storyhaven.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["storyhaven", "storyhaven.local"];

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "STORYHAVEN_CONFIG";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `STORYHAVEN_`，层级分隔符 `__`）
/// 2. 配置文件（`STORYHAVEN_CONFIG` 指定的文件，否则 storyhaven.toml / storyhaven.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `STORYHAVEN_CATALOG__SOURCE=https://example.org/stories.json`
/// - `STORYHAVEN_CATALOG__TIMEOUT_SECS=30`
/// - `STORYHAVEN_READER__WRAP_WIDTH=100`
/// - `STORYHAVEN_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => load_config_from_path(Some(Path::new(&path))),
        None => load_config_from_path(None),
    }
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("catalog.source", "http://localhost:3000/stories.json")?
        .set_default("reader.wrap_width", 80)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: STORYHAVEN_CATALOG__SOURCE=./stories.json
    builder = builder.add_source(
        Environment::with_prefix("STORYHAVEN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.catalog.source.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Catalog source cannot be empty".to_string(),
        ));
    }

    if config.catalog.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "Catalog timeout cannot be 0 (omit it to disable the timeout)".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Catalog Source: {}", config.catalog.source);
    match config.catalog.timeout_secs {
        Some(secs) => tracing::info!("Catalog Timeout: {}s", secs),
        None => tracing::info!("Catalog Timeout: none"),
    }
    tracing::info!("Wrap Width: {}", config.reader.wrap_width);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
