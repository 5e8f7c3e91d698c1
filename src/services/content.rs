//! 内容提供服务
//!
//! 把内置目录包装成异步值流：四个单值流在人工延迟后产出一次并结束，
//! 角色流是无限的共享轮换流。

use futures_util::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use std::time::Duration;

use crate::config::TimingConfig;
use crate::error::{AppError, Result};
use crate::models::{ProfileSummary, ProjectEntry, SkillBadge, TimelineEntry};
use crate::services::catalog::Catalog;
use crate::services::rotating_role::RoleBroadcaster;
use crate::view::ensure_unique_keys;

/// 内容提供者
///
/// 单值流在订阅方提前丢弃时静默取消，不会产出任何值。
pub trait ContentProvider: Send + Sync {
    fn profile(&self) -> BoxStream<'static, ProfileSummary>;
    fn skills(&self) -> BoxStream<'static, Vec<SkillBadge>>;
    fn timeline(&self) -> BoxStream<'static, Vec<TimelineEntry>>;
    fn projects(&self) -> BoxStream<'static, Vec<ProjectEntry>>;
    fn rotating_role(&self) -> BoxStream<'static, String>;
}

/// 延迟 `delay` 后产出一次 `value`，随后结束
pub fn delayed<T>(value: T, delay: Duration) -> BoxStream<'static, T>
where
    T: Send + 'static,
{
    stream::once(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        value
    })
    .boxed()
}

/// 基于内置目录的内容提供者
#[derive(Debug, Clone)]
pub struct PortfolioContent {
    profile: Arc<ProfileSummary>,
    skills: Arc<Vec<SkillBadge>>,
    timeline: Arc<Vec<TimelineEntry>>,
    projects: Arc<Vec<ProjectEntry>>,
    roles: RoleBroadcaster,
    timing: TimingConfig,
}

impl PortfolioContent {
    /// 使用随站点发布的内容
    pub fn new(timing: TimingConfig) -> Result<Self> {
        Self::with_catalog(Catalog::shipped(), timing)
    }

    /// 使用自定义目录
    ///
    /// 简称为空或列表标识重复时拒绝构建。
    pub fn with_catalog(catalog: Catalog, timing: TimingConfig) -> Result<Self> {
        if !catalog.profile.has_short_name() {
            return Err(AppError::Validation(
                "profile short name is empty".to_string(),
            ));
        }
        ensure_unique_keys(&catalog.skills)?;
        ensure_unique_keys(&catalog.timeline)?;
        ensure_unique_keys(&catalog.projects)?;

        let roles = RoleBroadcaster::new(catalog.roles, timing.role_interval())?;

        Ok(Self {
            profile: Arc::new(catalog.profile),
            skills: Arc::new(catalog.skills),
            timeline: Arc::new(catalog.timeline),
            projects: Arc::new(catalog.projects),
            roles,
            timing,
        })
    }

    /// 共享的角色轮换器
    pub fn role_broadcaster(&self) -> &RoleBroadcaster {
        &self.roles
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn profile_snapshot(&self) -> &ProfileSummary {
        &self.profile
    }

    pub fn skills_snapshot(&self) -> &[SkillBadge] {
        &self.skills
    }

    pub fn timeline_snapshot(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn projects_snapshot(&self) -> &[ProjectEntry] {
        &self.projects
    }
}

impl ContentProvider for PortfolioContent {
    fn profile(&self) -> BoxStream<'static, ProfileSummary> {
        delayed((*self.profile).clone(), self.timing.profile_delay())
    }

    fn skills(&self) -> BoxStream<'static, Vec<SkillBadge>> {
        delayed((*self.skills).clone(), self.timing.skills_delay())
    }

    fn timeline(&self) -> BoxStream<'static, Vec<TimelineEntry>> {
        delayed((*self.timeline).clone(), self.timing.timeline_delay())
    }

    fn projects(&self) -> BoxStream<'static, Vec<ProjectEntry>> {
        delayed((*self.projects).clone(), self.timing.projects_delay())
    }

    fn rotating_role(&self) -> BoxStream<'static, String> {
        self.roles.subscribe().into_stream().boxed()
    }
}
