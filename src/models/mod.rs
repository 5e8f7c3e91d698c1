//! 核心数据模型模块
//!
//! 定义作品集的内容结构：ProfileSummary, SkillBadge, TimelineEntry, ProjectEntry。
//! 所有记录在进程启动时构造，之后只读。

pub mod profile;
pub mod project;
pub mod skill;
pub mod timeline;

pub use profile::*;
pub use project::*;
pub use skill::*;
pub use timeline::*;
