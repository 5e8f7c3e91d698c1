//! 技能徽章数据模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 熟练程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Advanced,
    Intermediate,
    Learning,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Learning => "Learning",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 技能徽章
///
/// `label` 在列表内唯一，作为渲染标识。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBadge {
    pub label: String,
    pub level: SkillLevel,
    /// 亮点（有序）
    pub highlights: Vec<String>,
}

impl SkillBadge {
    pub fn new<I, S>(label: impl Into<String>, level: SkillLevel, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            level,
            highlights: highlights.into_iter().map(Into::into).collect(),
        }
    }
}
