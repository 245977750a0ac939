//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单/库存接口 (catalog collaborator)
//! - [`tables`] - 桌台占用接口 (fulfillment collaborator)
//! - [`cart`] - 购物车接口
//! - [`checkout`] - 结账接口
//! - [`orders`] - 订单查询接口

pub mod cart;
pub mod checkout;
pub mod health;
pub mod menu;
pub mod orders;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
