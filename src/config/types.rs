//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 应用元信息
    #[serde(default)]
    pub app: AppInfoConfig,

    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体最大大小（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 应用元信息，出现在欢迎和健康检查响应中
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfoConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_description")]
    pub description: String,

    #[serde(default = "default_app_version")]
    pub version: String,
}

fn default_app_name() -> String {
    "itemdesk".to_string()
}

fn default_app_description() -> String {
    "In-memory item catalog API".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
            version: default_app_version(),
        }
    }
}

/// 跨域配置
///
/// 来源、方法、请求头始终全部放行
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// 是否允许携带凭证
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// 预检结果缓存时间（秒）
    #[serde(default = "default_cors_max_age")]
    pub max_age_secs: u64,
}

fn default_allow_credentials() -> bool {
    true
}

fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_credentials: default_allow_credentials(),
            max_age_secs: default_cors_max_age(),
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
