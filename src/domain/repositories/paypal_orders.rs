use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::paypal_orders::PaypalOrderDetails;

#[async_trait]
#[automock]
pub trait PaypalOrderProvider {
    async fn fetch_order(&self, paypal_id: &str) -> Result<PaypalOrderDetails>;
}
