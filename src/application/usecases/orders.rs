use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{
    entities::orders::InsertOrderEntity,
    repositories::{orders::OrderRepository, paypal_orders::PaypalOrderProvider},
    value_objects::orders::{ListOrdersFilter, OrderFullInfos, OrderModel},
};

/// Entry point for callers of the order store: runs the validation rules, then
/// forwards to the repository. Repository errors pass through untouched.
pub struct OrderUseCase<R, P>
where
    R: OrderRepository + Send + Sync,
    P: PaypalOrderProvider + Send + Sync,
{
    order_repository: Arc<R>,
    paypal_order_provider: Arc<P>,
}

impl<R, P> OrderUseCase<R, P>
where
    R: OrderRepository + Send + Sync,
    P: PaypalOrderProvider + Send + Sync,
{
    pub fn new(order_repository: Arc<R>, paypal_order_provider: Arc<P>) -> Self {
        Self {
            order_repository,
            paypal_order_provider,
        }
    }

    pub async fn get_order(&self, order_id: i32) -> Result<OrderModel> {
        let order = self.order_repository.find_by_id(order_id).await?;

        Ok(order.into())
    }

    /// Inserts the order and writes the generated id back into it.
    pub async fn create_order(&self, mut order: OrderModel) -> Result<OrderModel> {
        order.validate()?;

        order.id = self
            .order_repository
            .create(InsertOrderEntity::from(&order))
            .await?;

        info!(
            order_id = order.id,
            user_id = %order.user_id,
            cluster_name = %order.cluster_name,
            "Order has been created"
        );

        Ok(order)
    }

    /// Full-row replace. Returns the affected row count; 0 means the id does not exist.
    pub async fn update_order(&self, order: &OrderModel) -> Result<usize> {
        order.validate()?;

        let affected = self
            .order_repository
            .update(order.id, InsertOrderEntity::from(order))
            .await?;

        if affected == 0 {
            warn!(order_id = order.id, "Update matched no order");
        } else {
            debug!(order_id = order.id, "Order has been updated");
        }

        Ok(affected)
    }

    /// Returns the removed row count; deleting an unknown id is not an error.
    pub async fn delete_order(&self, order_id: i32) -> Result<usize> {
        let affected = self.order_repository.delete(order_id).await?;

        if affected == 0 {
            warn!(order_id, "Delete matched no order");
        } else {
            debug!(order_id, "Order has been deleted");
        }

        Ok(affected)
    }

    pub async fn list_orders(&self, filter: &ListOrdersFilter) -> Result<Vec<OrderModel>> {
        filter.validate()?;

        let orders = self.order_repository.list(filter).await?;

        debug!(
            offset = filter.offset,
            limit = filter.limit,
            user_id = ?filter.user_id,
            count = orders.len(),
            "Listed orders"
        );

        Ok(orders.into_iter().map(OrderModel::from).collect())
    }

    pub async fn get_order_full_infos(&self, order_id: i32) -> Result<OrderFullInfos> {
        let app_order = self.get_order(order_id).await?;
        let paypal_order = self
            .paypal_order_provider
            .fetch_order(&app_order.paypal_id)
            .await?;

        Ok(OrderFullInfos {
            app_order,
            paypal_order,
        })
    }
}
