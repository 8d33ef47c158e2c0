//! 配置系统
//! 默认值 + 环境变量（前缀 ADMIN_）分层加载

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// 模拟网络延迟（毫秒），0 表示仅让出一次调度
    pub delay_ms: u64,
}

impl ServiceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// 持久化后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// file 后端使用的 JSON 文件路径
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub users: usize,
    pub roles: usize,
    pub permissions: usize,
    /// 每个用户/角色最多关联的引用数量
    pub max_links: usize,
    /// 固定随机种子（可选），便于复现数据集
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 1000,
            roles: 100,
            permissions: 100,
            max_links: 10,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别: trace, debug, info, warn, error
    pub level: String,
    /// 日志格式: json, pretty, compact
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub store: StoreConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Config::builder();

        // 添加默认配置
        settings = settings
            .set_default("service.delay_ms", 0)?
            .set_default("store.backend", "file")?
            .set_default("store.path", "admin-console.json")?
            .set_default("seed.users", 1000)?
            .set_default("seed.roles", 100)?
            .set_default("seed.permissions", 100)?
            .set_default("seed.max_links", 10)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?;

        // 从环境变量加载配置（前缀为 ADMIN_）
        settings = settings.add_source(
            Environment::with_prefix("ADMIN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// 验证配置合法性
    fn validate(&self) -> Result<(), ConfigError> {
        if self.service.delay_ms > 60_000 {
            return Err(ConfigError::Message(
                "service.delay_ms must be <= 60000".to_string(),
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        match self.logging.format.to_lowercase().as_str() {
            "json" | "pretty" | "compact" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log format: {}. Must be one of: json, pretty, compact",
                    self.logging.format
                )))
            }
        }

        if self.store.backend == StoreBackend::File && self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "store.path is required for the file backend".to_string(),
            ));
        }

        // 种子数据必须非空，否则 reset 之后列表永远为空
        if self.seed.users == 0 || self.seed.roles == 0 || self.seed.permissions == 0 {
            return Err(ConfigError::Message(
                "seed.users, seed.roles and seed.permissions must be > 0".to_string(),
            ));
        }

        if self.seed.max_links == 0 {
            return Err(ConfigError::Message("seed.max_links must be >= 1".to_string()));
        }

        Ok(())
    }
}
