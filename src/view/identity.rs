//! 渲染标识
//!
//! 列表项的稳定标识，渲染层据此在重新渲染时匹配条目，而不依赖数组下标。

use std::collections::HashSet;

use crate::error::{AppError, Result};
use crate::models::{ProjectEntry, SkillBadge, TimelineEntry};

/// 技能标识：标签
pub fn track_by_label(skill: &SkillBadge) -> String {
    skill.label.clone()
}

/// 时间线标识：时间段与标题的组合
pub fn track_by_timeline(entry: &TimelineEntry) -> String {
    format!("{}-{}", entry.period, entry.title)
}

/// 项目标识：名称
pub fn track_by_project(project: &ProjectEntry) -> String {
    project.name.clone()
}

/// 可作为键控列表条目渲染的类型
pub trait RenderKey {
    fn render_key(&self) -> String;
}

impl RenderKey for SkillBadge {
    fn render_key(&self) -> String {
        track_by_label(self)
    }
}

impl RenderKey for TimelineEntry {
    fn render_key(&self) -> String {
        track_by_timeline(self)
    }
}

impl RenderKey for ProjectEntry {
    fn render_key(&self) -> String {
        track_by_project(self)
    }
}

/// 检查列表内标识唯一
pub fn ensure_unique_keys<T: RenderKey>(items: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let key = item.render_key();
        if !seen.insert(key.clone()) {
            return Err(AppError::Validation(format!("duplicate render key: {key}")));
        }
    }
    Ok(())
}
