//! itemdesk - 内存商品目录 HTTP 服务

use itemdesk::config::{load_config, print_config, AppConfig};
use itemdesk::infrastructure::http::{AppState, HttpServer, ServerConfig};
use itemdesk::infrastructure::memory::InMemoryItemStore;
use tracing_subscriber::EnvFilter;

/// 初始化日志，RUST_LOG 优先于配置文件中的级别
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},itemdesk={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => {
            // 无法监听信号时保持运行，交由进程管理器终止
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("{} - {}", config.app.name, config.app.description);
    print_config(&config);

    // 存储在进程生命周期内有效
    let item_store = InMemoryItemStore::new().arc();

    let state = AppState::new(item_store, config.app.clone());
    let server = HttpServer::new(ServerConfig::from_app_config(&config), state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
