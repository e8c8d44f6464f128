pub mod orders;
pub mod paypal_orders;
