//! Coral POS Server - 餐厅点单结账服务
//!
//! # 架构概述
//!
//! 核心是结账提交协议 (`checkout`)：桌台独占、库存条件递减、订单号原子
//! 分配、订单落盘与清空购物车，全部在一个 redb 写事务内提交。
//! 其余模块是围绕它的普通 CRUD 协作方。
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── checkout/      # 结账提交协议 (storage/inventory/tables/sequencer/cart/coordinator)
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、时间工具
//! ```

pub mod api;
pub mod checkout;
pub mod core;
pub mod utils;

// Re-export 公共类型
pub use checkout::{
    CartStore, CheckoutCoordinator, CheckoutError, CheckoutEvent, CheckoutEvents, CheckoutStorage,
    InventoryLedger, OrderSequencer, TableRegistry,
};
pub use crate::core::{Config, Server, ServerState, setup_environment};
pub use utils::{AppError, AppResponse, AppResult};

pub fn print_banner() {
    println!(
        r#"
   ______                __
  / ____/___  _________ _/ /
 / /   / __ \/ ___/ __ `/ /
/ /___/ /_/ / /  / /_/ / /
\____/\____/_/   \__,_/_/
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/
    "#
    );
}
