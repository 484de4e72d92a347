//! Punchline Server - 喜剧俱乐部餐厅点餐/预订服务
//!
//! # 架构概述
//!
//! 本模块是服务的主入口，提供以下核心功能：
//!
//! - **HTTP API** (`api`): 预订、订单和菜单目录的 RESTful 接口
//! - **内存存储** (`store`): 进程内 append-only 预订/订单存储
//! - **菜单目录** (`catalog`): 内嵌 JSON 数据的只读目录
//! - **金额计算** (`money`): decimal 精度的订单总额校验
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── models/        # 实体记录和请求负载
//! ├── store/         # 内存存储
//! ├── catalog.rs     # 菜单目录
//! ├── money/         # 金额计算
//! └── utils/         # 错误、ID/时钟、日志
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod models;
pub mod money;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::catalog::{CategoryFilter, MenuCatalog};
pub use crate::core::{Config, Server, ServerState};
pub use crate::store::{BookingStore, OrderStore};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::init_logger;

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____                  __    ___
   / __ \__  ______  ____/ /_  / (_)___  ___
  / /_/ / / / / __ \/ ___/ __ \/ / / __ \/ _ \
 / ____/ /_/ / / / / /__/ / / / / / / / /  __/
/_/    \__,_/_/ /_/\___/_/ /_/_/_/_/ /_/\___/
    "#
    );
}
