//! Vitrine - 个人作品集服务
//!
//! 内置内容通过异步值流对外提供，视图组件订阅这些流并渲染单页作品集，
//! 首屏的角色文字由一个共享的定时轮换器驱动。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod render;
pub mod security;
pub mod services;
pub mod view;
