//! Order Store
//!
//! 创建订单前由 store 重新计算总额：按 decimal 求和行项目，提交值与
//! 计算值相差超过 0.01 则拒绝且不追加任何记录。行项目价格取自客户端
//! 提交的快照，不与菜单目录核对。

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{NewOrder, Order, OrderStatus};
use crate::money;
use crate::utils::{Clock, IdGenerator, SystemClock, UuidIdGenerator};

use super::{StoreError, StoreResult};

const ID_KIND: &str = "order";

/// Append-only in-memory order store
#[derive(Clone)]
pub struct OrderStore {
    records: Arc<RwLock<Vec<Order>>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::with_sources(Arc::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    /// Construct with explicit id/clock sources (deterministic in tests)
    pub fn with_sources(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            ids,
            clock,
        }
    }

    /// Verify the submitted total, then append the order as pending.
    ///
    /// On a total mismatch nothing is persisted. Creation and update
    /// timestamps are stamped identically.
    pub fn create(&self, draft: NewOrder) -> StoreResult<Order> {
        let computed = money::order_total(&draft.items);
        if !money::totals_match(draft.total, computed) {
            return Err(StoreError::TotalMismatch {
                submitted: draft.total,
                computed: money::to_f64(computed),
            });
        }

        let now = self.clock.now();
        let order = Order {
            id: self.ids.next_id(ID_KIND),
            items: draft.items,
            customer_name: draft.customer_name,
            table_number: draft.table_number,
            special_instructions: draft.special_instructions,
            total: draft.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.records.write().push(order.clone());
        Ok(order)
    }

    /// All orders, most recent first. Stored insertion order is untouched.
    pub fn list_recent(&self) -> Vec<Order> {
        let mut orders = self.records.read().clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
