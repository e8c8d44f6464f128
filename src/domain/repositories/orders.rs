use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::orders::{InsertOrderEntity, OrderEntity, UpdateOrderEntity},
    value_objects::orders::ListOrdersFilter,
};

/// Row-level access to the `orders` table. Implementations do not validate; callers
/// run the order validation rules first.
#[async_trait]
#[automock]
pub trait OrderRepository {
    async fn find_by_id(&self, order_id: i32) -> Result<OrderEntity>;
    async fn create(&self, order: InsertOrderEntity) -> Result<i32>;
    /// Rewrites every column of the row. Returns the number of rows touched
    /// (0 when the id is unknown).
    async fn update(&self, order_id: i32, order: UpdateOrderEntity) -> Result<usize>;
    /// Returns the number of rows removed (0 when the id is unknown).
    async fn delete(&self, order_id: i32) -> Result<usize>;
    async fn list(&self, filter: &ListOrdersFilter) -> Result<Vec<OrderEntity>>;
}
