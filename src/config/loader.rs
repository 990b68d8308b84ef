//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
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
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "ITEMDESK";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `ITEMDESK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `ITEMDESK_SERVER__HOST=127.0.0.1`
/// - `ITEMDESK_SERVER__PORT=8080`
/// - `ITEMDESK_CORS__ALLOW_CREDENTIALS=false`
/// - `ITEMDESK_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("app.name", "itemdesk")?
        .set_default("app.description", "In-memory item catalog API")?
        .set_default("app.version", env!("CARGO_PKG_VERSION"))?
        .set_default("cors.allow_credentials", true)?
        .set_default("cors.max_age_secs", 3600)?
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

    // 3. 环境变量（最高优先级），例如 ITEMDESK_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
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
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if config.app.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "App name cannot be empty".to_string(),
        ));
    }

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("App: {} v{}", config.app.name, config.app.version);
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("CORS Allow Credentials: {}", config.cors.allow_credentials);
    tracing::info!("CORS Max Age: {}s", config.cors.max_age_secs);
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_blank_app_name() {
        let mut config = AppConfig::default();
        config.app.name = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
[server]
port = 9100

[app]
name = "catalog"

[cors]
allow_credentials = false
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.app.name, "catalog");
        assert!(!config.cors.allow_credentials);
        assert_eq!(config.cors.max_age_secs, 3600);
    }

    #[test]
    fn test_load_from_file_rejects_zero_port() {
        let file = write_config("[server]\nport = 0\n");
        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_required_file_is_load_error() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/itemdesk.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
