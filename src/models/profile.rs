//! 个人简介数据模型
//!
//! 首屏展示的基础信息。编译期固定，进程生命周期内只读。

use serde::{Deserialize, Serialize};

/// 个人简介
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// 全名
    pub full_name: String,

    /// 简称，用于问候语，不能为空
    pub short_name: String,

    /// 标题/职位
    pub headline: String,

    /// 简介
    pub description: String,

    /// 外部链接（简历或社交主页），原样透传
    pub resume_url: String,
}

impl ProfileSummary {
    /// 创建个人简介
    pub fn new(
        full_name: impl Into<String>,
        short_name: impl Into<String>,
        headline: impl Into<String>,
        description: impl Into<String>,
        resume_url: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            short_name: short_name.into(),
            headline: headline.into(),
            description: description.into(),
            resume_url: resume_url.into(),
        }
    }

    /// 简称是否可用于问候语
    pub fn has_short_name(&self) -> bool {
        !self.short_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_check() {
        let profile = ProfileSummary::new("Full Name", "  ", "Headline", "D", "https://x");
        assert!(!profile.has_short_name());

        let profile = ProfileSummary::new("Full Name", "Full", "Headline", "D", "https://x");
        assert!(profile.has_short_name());
    }
}
