//! 渲染层
//!
//! 视图快照 → HTML 页面，以及基于渲染标识的键控列表协调。

pub mod keyed;
pub mod page;

pub use keyed::{ListOp, diff_keyed, keys_of};
pub use page::PageRenderer;

/// 浏览器端订阅角色流的脚本
pub const ROTATING_ROLE_SCRIPT: &str = include_str!("templates/rotating-role.js");
