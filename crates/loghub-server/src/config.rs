use anyhow::{anyhow, Result};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// 环境变量：上游分析 API 的项目标识
pub const ENV_PROJECT_ID: &str = "LOGHUB_PROJECT_ID";

/// 环境变量：上游分析 API 的访问令牌
pub const ENV_ACCESS_TOKEN: &str = "LOGHUB_ACCESS_TOKEN";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// 上游分析 API 基地址
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// 默认值函数
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://api.supabase.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            analytics: AnalyticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从 config.toml 加载；文件不存在时使用默认配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let config = Config::builder()
            .add_source(File::new(
                path.to_str().ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// 上游访问凭证。
///
/// 仅从环境变量注入，没有内置默认值；缺失时启动失败。
#[derive(Debug, Clone)]
pub struct Credentials {
    pub project_id: String,
    pub access_token: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            project_id: required_env(ENV_PROJECT_ID)?,
            access_token: required_env(ENV_ACCESS_TOKEN)?,
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("environment variable {} is not set", name)),
    }
}
