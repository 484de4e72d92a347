//! 数据模型 - 实体记录和请求负载
//!
//! # 结构
//!
//! - [`booking`] - 预订记录和创建请求
//! - [`order`] - 订单记录和创建请求
//! - [`menu`] - 菜单目录条目 (只读)
//!
//! 每个实体分两层：请求负载 (`*Request`, 携带 `validator` 约束) 和
//! 验证后的 typed draft (`New*`)，store 只接受后者。

pub mod booking;
pub mod menu;
pub mod order;

pub use booking::{Booking, BookingRequest, BookingStatus, NewBooking, TableType};
pub use menu::{MenuCategory, MenuItem};
pub use order::{NewOrder, Order, OrderItemRequest, OrderLine, OrderRequest, OrderStatus};
