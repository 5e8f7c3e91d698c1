use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

/// 内容加载节奏配置
///
/// 延迟只用于模拟网络加载，不影响内容本身。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    /// 个人简介延迟（毫秒）
    pub profile_delay_ms: u64,
    /// 技能列表延迟（毫秒）
    pub skills_delay_ms: u64,
    /// 职业时间线延迟（毫秒）
    pub timeline_delay_ms: u64,
    /// 项目列表延迟（毫秒）
    pub projects_delay_ms: u64,
    /// 角色轮换间隔（毫秒）
    pub role_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            profile_delay_ms: 200,
            skills_delay_ms: 200,
            timeline_delay_ms: 300,
            projects_delay_ms: 300,
            role_interval_ms: 2800,
        }
    }
}

impl TimingConfig {
    /// 所有延迟为零，轮换间隔保持默认
    pub fn immediate() -> Self {
        Self {
            profile_delay_ms: 0,
            skills_delay_ms: 0,
            timeline_delay_ms: 0,
            projects_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn profile_delay(&self) -> Duration {
        Duration::from_millis(self.profile_delay_ms)
    }

    pub fn skills_delay(&self) -> Duration {
        Duration::from_millis(self.skills_delay_ms)
    }

    pub fn timeline_delay(&self) -> Duration {
        Duration::from_millis(self.timeline_delay_ms)
    }

    pub fn projects_delay(&self) -> Duration {
        Duration::from_millis(self.projects_delay_ms)
    }

    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.role_interval_ms)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别（EnvFilter 语法）
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 内容加载节奏
    pub timing: TimingConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            timing: TimingConfig::default(),
            logging: LoggingConfig::default(),
            app_name: "vitrine".into(),
            environment: "development".into(),
        }
    }
}

impl AppConfig {
    /// 创建开发环境配置（debug 日志）
    pub fn development() -> Self {
        let mut config = Self::default();
        config.logging.level = "debug".into();
        config
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::default();
        config.environment = "production".into();
        config.logging.structured = true;
        config
    }

    /// 监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
