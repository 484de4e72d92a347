use std::sync::Arc;

use crate::catalog::MenuCatalog;
use crate::core::{Config, Result, ServerError};
use crate::store::{BookingStore, OrderStore};

/// 服务器状态 - 持有所有共享组件的引用
///
/// ServerState 是服务的核心数据结构。所有字段内部都是 Arc 共享，
/// Clone 是浅拷贝，成本极低；axum 每次请求克隆一份。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | bookings | BookingStore | 预订存储 (内存) |
/// | orders | OrderStore | 订单存储 (内存) |
/// | catalog | Arc<MenuCatalog> | 菜单目录 (只读) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 预订存储
    pub bookings: BookingStore,
    /// 订单存储
    pub orders: OrderStore,
    /// 菜单目录
    pub catalog: Arc<MenuCatalog>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 解析内嵌菜单目录并构造空的内存存储。目录解析失败视为启动错误。
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog =
            MenuCatalog::load_embedded().map_err(|e| ServerError::Catalog(e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            bookings: BookingStore::new(),
            orders: OrderStore::new(),
            catalog: Arc::new(catalog),
        })
    }
}
