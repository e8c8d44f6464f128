pub mod order_validation;
pub mod orders;
pub mod paypal_orders;
