//! 项目展示数据模型

use serde::{Deserialize, Serialize};

/// 项目条目
///
/// `name` 唯一，作为渲染标识。链接均为不透明字符串，不做校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// 源码仓库链接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// 在线演示链接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

impl ProjectEntry {
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            github: None,
            live: None,
        }
    }

    /// 设置源码仓库链接
    pub fn with_github(mut self, url: impl Into<String>) -> Self {
        self.github = Some(url.into());
        self
    }

    /// 设置在线演示链接
    pub fn with_live(mut self, url: impl Into<String>) -> Self {
        self.live = Some(url.into());
        self
    }
}
