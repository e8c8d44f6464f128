use diesel::prelude::*;

use crate::infrastructure::postgres::schema::orders;

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = orders)]
pub struct OrderEntity {
    pub id: i32,
    pub paypal_id: String,
    pub user_id: String,
    pub cluster_name: String,
    pub has_control_plane: bool,
    pub has_monitoring: bool,
    pub has_alerting: bool,
    pub images_storage: i32,
    pub monitoring_storage: i32,
}

/// Every column except `id`. Used both for inserts and for full-row replace updates.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub struct InsertOrderEntity {
    pub paypal_id: String,
    pub user_id: String,
    pub cluster_name: String,
    pub has_control_plane: bool,
    pub has_monitoring: bool,
    pub has_alerting: bool,
    pub images_storage: i32,
    pub monitoring_storage: i32,
}

// UpdateOrderEntity is the application-facing alias for rewriting a whole `orders` row.
pub type UpdateOrderEntity = InsertOrderEntity;
