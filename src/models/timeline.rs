//! 职业时间线数据模型

use serde::{Deserialize, Serialize};

/// 时间线条目
///
/// `(period, title)` 组合唯一，作为复合渲染标识。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// 时间段标签，如 "2020 — 2022"
    pub period: String,
    pub title: String,
    pub organisation: String,
    pub description: String,
    /// 技术标签（有序）
    pub stack: Vec<String>,
}

impl TimelineEntry {
    pub fn new<I, S>(
        period: impl Into<String>,
        title: impl Into<String>,
        organisation: impl Into<String>,
        description: impl Into<String>,
        stack: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            period: period.into(),
            title: title.into(),
            organisation: organisation.into(),
            description: description.into(),
            stack: stack.into_iter().map(Into::into).collect(),
        }
    }
}
