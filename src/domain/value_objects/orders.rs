use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::domain::{
    entities::orders::{InsertOrderEntity, OrderEntity},
    value_objects::{
        order_validation::{FieldViolation, OrderValidationError, cluster_request_violations},
        paypal_orders::PaypalOrderDetails,
    },
};

/// A cluster provisioning request linked to a payment order.
///
/// Missing fields deserialize to their zero value so that `validate` can report them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderModel {
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

impl OrderModel {
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        let mut violations = Vec::new();

        if self.paypal_id.is_empty() {
            violations.push(FieldViolation::PaypalIdRequired);
        }

        violations.extend(cluster_request_violations(
            &self.user_id,
            &self.cluster_name,
            self.has_monitoring,
            self.images_storage,
            self.monitoring_storage,
        ));

        OrderValidationError::check(violations)
    }
}

impl From<OrderEntity> for OrderModel {
    fn from(value: OrderEntity) -> Self {
        Self {
            id: value.id,
            paypal_id: value.paypal_id,
            user_id: value.user_id,
            cluster_name: value.cluster_name,
            has_control_plane: value.has_control_plane,
            has_monitoring: value.has_monitoring,
            has_alerting: value.has_alerting,
            images_storage: value.images_storage,
            monitoring_storage: value.monitoring_storage,
        }
    }
}

impl From<&OrderModel> for InsertOrderEntity {
    fn from(value: &OrderModel) -> Self {
        Self {
            paypal_id: value.paypal_id.clone(),
            user_id: value.user_id.clone(),
            cluster_name: value.cluster_name.clone(),
            has_control_plane: value.has_control_plane,
            has_monitoring: value.has_monitoring,
            has_alerting: value.has_alerting,
            images_storage: value.images_storage,
            monitoring_storage: value.monitoring_storage,
        }
    }
}

/// The earlier order shape that predates payment linkage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnlinkedOrderModel {
    pub id: i32,
    pub user_id: String,
    pub cluster_name: String,
    pub has_control_plane: bool,
    pub has_monitoring: bool,
    pub has_alerting: bool,
    pub images_storage: i32,
    pub monitoring_storage: i32,
}

impl UnlinkedOrderModel {
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        OrderValidationError::check(cluster_request_violations(
            &self.user_id,
            &self.cluster_name,
            self.has_monitoring,
            self.images_storage,
            self.monitoring_storage,
        ))
    }

    pub fn link_payment(self, paypal_id: impl Into<String>) -> OrderModel {
        OrderModel {
            id: self.id,
            paypal_id: paypal_id.into(),
            user_id: self.user_id,
            cluster_name: self.cluster_name,
            has_control_plane: self.has_control_plane,
            has_monitoring: self.has_monitoring,
            has_alerting: self.has_alerting,
            images_storage: self.images_storage,
            monitoring_storage: self.monitoring_storage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSchemaVersion {
    Unlinked,
    PaymentLinked,
}

/// An incoming order record of either schema version. The version is decided by the
/// presence of a non-null `paypal_id`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VersionedOrder {
    PaymentLinked(OrderModel),
    Unlinked(UnlinkedOrderModel),
}

impl VersionedOrder {
    pub fn schema_version(&self) -> OrderSchemaVersion {
        match self {
            VersionedOrder::PaymentLinked(_) => OrderSchemaVersion::PaymentLinked,
            VersionedOrder::Unlinked(_) => OrderSchemaVersion::Unlinked,
        }
    }

    /// Brings the record up to the current schema. Unlinked records need a payment reference.
    pub fn into_current(
        self,
        paypal_id: Option<String>,
    ) -> Result<OrderModel, OrderValidationError> {
        match (self, paypal_id) {
            (VersionedOrder::PaymentLinked(order), _) => Ok(order),
            (VersionedOrder::Unlinked(order), Some(paypal_id)) => Ok(order.link_payment(paypal_id)),
            (VersionedOrder::Unlinked(_), None) => Err(OrderValidationError {
                violations: vec![FieldViolation::PaypalIdRequired],
            }),
        }
    }
}

impl<'de> Deserialize<'de> for VersionedOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        if value.get("paypal_id").is_some_and(|v| !v.is_null()) {
            serde_json::from_value(value)
                .map(VersionedOrder::PaymentLinked)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(VersionedOrder::Unlinked)
                .map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListOrdersFilter {
    pub offset: i64,
    pub limit: i64,
    pub user_id: Option<String>,
}

impl ListOrdersFilter {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit,
            user_id: None,
        }
    }

    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), OrderValidationError> {
        let mut violations = Vec::new();

        if self.offset < 0 {
            violations.push(FieldViolation::NegativeOffset(self.offset));
        }
        if self.limit < 0 {
            violations.push(FieldViolation::NegativeLimit(self.limit));
        }

        OrderValidationError::check(violations)
    }
}

/// An order paired with the payment provider's view of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderFullInfos {
    pub app_order: OrderModel,
    pub paypal_order: PaypalOrderDetails,
}
