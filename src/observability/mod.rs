//! 可观测性模块
//!
//! 提供结构化日志初始化和健康检查。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::services::RoleBroadcaster;

// ===== Logging =====

/// 初始化全局日志订阅器
///
/// `RUST_LOG` 存在时优先于配置中的级别。
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.structured {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub rotating_role: RotatingRoleHealth,
}

/// 角色轮换器状态
#[derive(Debug, Serialize)]
pub struct RotatingRoleHealth {
    pub running: bool,
    pub observers: usize,
    pub tick: Option<u64>,
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub start_time: DateTime<Utc>,
    pub version: String,
    pub roles: RoleBroadcaster,
}

impl ObservabilityState {
    pub fn new(version: String, roles: RoleBroadcaster) -> Self {
        Self {
            start_time: Utc::now(),
            version,
            roles,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_milliseconds() as f64 / 1000.0
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: self.version.clone(),
            uptime_seconds: self.uptime_seconds(),
            rotating_role: RotatingRoleHealth {
                running: self.roles.is_running(),
                observers: self.roles.observer_count(),
                tick: self.roles.current_tick(),
            },
        }
    }
}

/// 获取完整健康状态
pub async fn health_check(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(state.health())
}

/// 存活探针
pub async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "alive" }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::ServiceExt;

    fn roles() -> RoleBroadcaster {
        RoleBroadcaster::new(["A", "B"], Duration::from_millis(2800)).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_role_observers() {
        let roles = roles();
        let state = Arc::new(ObservabilityState::new("0.1.0".to_string(), roles.clone()));
        let _subscription = roles.subscribe();

        let response = create_observability_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["rotating_role"]["running"], true);
        assert_eq!(json["rotating_role"]["observers"], 1);
        assert_eq!(json["rotating_role"]["tick"], 0);
    }

    #[test]
    fn test_idle_broadcaster_health() {
        let state = ObservabilityState::new("0.1.0".to_string(), roles());
        let health = state.health();
        assert!(!health.rotating_role.running);
        assert_eq!(health.rotating_role.tick, None);
    }
}
