use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 环境变量前缀，嵌套字段以 `__` 分隔，如 `VITRINE_SERVER__PORT`
pub const ENV_PREFIX: &str = "VITRINE_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级（后者覆盖前者）：
    /// 1. 内置默认值
    /// 2. ./config.toml
    /// 3. 环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.server.host.trim().is_empty() {
            return Err(ConfigValidationError::MissingHost);
        }

        if config.timing.role_interval_ms == 0 {
            return Err(ConfigValidationError::InvalidRoleInterval);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("服务地址未配置")]
    MissingHost,

    #[error("角色轮换间隔无效，必须大于 0")]
    InvalidRoleInterval,
}

impl From<ConfigValidationError> for crate::error::AppError {
    fn from(e: ConfigValidationError) -> Self {
        crate::error::AppError::Config(e.to_string())
    }
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
