//! 视图组件
//!
//! 订阅内容提供者的五个流，把每个流绑定成快照里的一个字段，
//! 并派生首屏问候语。生命周期：挂载 → 订阅 → 销毁（drop）。

pub mod hero;
pub mod identity;

use futures_util::stream::{self, BoxStream, StreamExt};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{ProfileSummary, ProjectEntry, SkillBadge, TimelineEntry};
use crate::services::ContentProvider;

pub use hero::{HeroIntro, hero_intro};
pub use identity::{RenderKey, ensure_unique_keys, track_by_label, track_by_project, track_by_timeline};

/// 视图字段快照，`None` 表示尚未加载
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub profile: Option<ProfileSummary>,
    pub hero_intro: Option<HeroIntro>,
    pub rotating_role: Option<String>,
    pub skills: Option<Vec<SkillBadge>>,
    pub timeline: Option<Vec<TimelineEntry>>,
    pub projects: Option<Vec<ProjectEntry>>,
}

impl ViewSnapshot {
    /// 所有字段均已绑定
    pub fn is_loaded(&self) -> bool {
        self.profile.is_some()
            && self.hero_intro.is_some()
            && self.rotating_role.is_some()
            && self.skills.is_some()
            && self.timeline.is_some()
            && self.projects.is_some()
    }

    fn apply(&mut self, binding: Binding) {
        match binding {
            Binding::Profile(profile) => self.profile = Some(profile),
            Binding::HeroIntro(intro) => self.hero_intro = Some(intro),
            Binding::Role(role) => self.rotating_role = Some(role),
            Binding::Skills(skills) => self.skills = Some(skills),
            Binding::Timeline(timeline) => self.timeline = Some(timeline),
            Binding::Projects(projects) => self.projects = Some(projects),
        }
    }
}

enum Binding {
    Profile(ProfileSummary),
    HeroIntro(HeroIntro),
    Role(String),
    Skills(Vec<SkillBadge>),
    Timeline(Vec<TimelineEntry>),
    Projects(Vec<ProjectEntry>),
}

/// 已挂载的作品集视图
///
/// 丢弃视图即取消订阅：未到期的单值流不再产出，角色轮换的观察者注销。
pub struct PortfolioView {
    snapshot: watch::Receiver<ViewSnapshot>,
    task: JoinHandle<()>,
}

impl PortfolioView {
    /// 挂载视图并订阅所有流，需在 tokio 运行时内调用
    pub fn mount(provider: &dyn ContentProvider) -> Self {
        let bindings: Vec<BoxStream<'static, Binding>> = vec![
            provider.profile().map(Binding::Profile).boxed(),
            hero_intro(provider.profile()).map(Binding::HeroIntro).boxed(),
            provider.rotating_role().map(Binding::Role).boxed(),
            provider.skills().map(Binding::Skills).boxed(),
            provider.timeline().map(Binding::Timeline).boxed(),
            provider.projects().map(Binding::Projects).boxed(),
        ];

        let (sender, snapshot) = watch::channel(ViewSnapshot::default());
        let task = tokio::spawn(async move {
            let mut merged = stream::select_all(bindings);
            while let Some(binding) = merged.next().await {
                sender.send_modify(|snapshot| snapshot.apply(binding));
            }
            debug!("portfolio view streams completed");
        });

        Self { snapshot, task }
    }

    /// 当前快照
    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshot.borrow().clone()
    }

    /// 订阅快照变化
    pub fn watch(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshot.clone()
    }

    /// 等待所有字段绑定完成
    pub async fn wait_loaded(&self) -> Result<ViewSnapshot> {
        let mut receiver = self.snapshot.clone();
        let snapshot = receiver
            .wait_for(ViewSnapshot::is_loaded)
            .await
            .map_err(|_| AppError::Internal("view streams ended before loading".to_string()))?;
        Ok(snapshot.clone())
    }

    pub fn track_by_label(&self, skill: &SkillBadge) -> String {
        track_by_label(skill)
    }

    pub fn track_by_timeline(&self, entry: &TimelineEntry) -> String {
        track_by_timeline(entry)
    }

    pub fn track_by_project(&self, project: &ProjectEntry) -> String {
        track_by_project(project)
    }
}

impl Drop for PortfolioView {
    fn drop(&mut self) {
        self.task.abort();
    }
}
