//! 服务模块

pub mod catalog;
pub mod content;
pub mod rotating_role;

pub use catalog::Catalog;
pub use content::{ContentProvider, PortfolioContent, delayed};
pub use rotating_role::{RoleBroadcaster, RoleSubscription};
