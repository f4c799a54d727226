//! Story Haven - 故事目录阅读器
//!
//! 启动流程: 加载配置 -> 初始化日志 -> 后台获取目录 -> 终端会话

use storyhaven::application::CatalogLoader;
use storyhaven::config::{load_config, print_config, LogConfig};
use storyhaven::infrastructure::{catalog_source_from_config, TerminalSession, TextRenderer};
use tokio::io::BufReader;

/// 初始化日志（输出到 stderr，不与界面混在一起）
fn init_tracing(config: &LogConfig) {
    let log_filter = format!("{},storyhaven={}", config.level, config.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Story Haven");
    print_config(&config);

    let source = catalog_source_from_config(&config.catalog)?;

    // 只获取一次，不重试
    let pending = CatalogLoader::new(source).spawn();

    let renderer = TextRenderer::new(config.reader.wrap_width);
    let mut session = TerminalSession::new(renderer, std::io::stdout());
    session.run(BufReader::new(tokio::io::stdin()), pending).await?;

    Ok(())
}
