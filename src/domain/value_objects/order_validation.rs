use thiserror::Error;
use uuid::Uuid;

pub const MAX_CLUSTER_NAME_LEN: usize = 63;

const HYPHENATED_UUID_LEN: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldViolation {
    #[error("paypal_id is required")]
    PaypalIdRequired,

    #[error("user_id is required")]
    UserIdRequired,

    #[error("user_id must be a valid UUID (value: {0})")]
    InvalidUserId(String),

    #[error("cluster_name is required")]
    ClusterNameRequired,

    #[error("cluster_name must be at most 63 characters (length: {0})")]
    ClusterNameTooLong(usize),

    #[error("cluster_name must be a lowercase DNS label (value: {0})")]
    InvalidClusterName(String),

    #[error("images_storage is required")]
    ImagesStorageRequired,

    #[error("monitoring_storage is required when has_monitoring is set")]
    MonitoringStorageRequired,

    #[error("offset must not be negative (value: {0})")]
    NegativeOffset(i64),

    #[error("limit must not be negative (value: {0})")]
    NegativeLimit(i64),
}

/// Every rule an order (or a list request) broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid order: {}", describe(.violations))]
pub struct OrderValidationError {
    pub violations: Vec<FieldViolation>,
}

impl OrderValidationError {
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    pub fn contains(&self, violation: &FieldViolation) -> bool {
        self.violations.contains(violation)
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// RFC 1123 label: lowercase alphanumerics and '-', alphanumeric at both ends.
pub fn is_valid_cluster_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_CLUSTER_NAME_LEN {
        return false;
    }

    let bytes = name.as_bytes();
    let is_alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();

    is_alnum(bytes[0])
        && is_alnum(bytes[bytes.len() - 1])
        && bytes.iter().all(|&b| is_alnum(b) || b == b'-')
}

pub fn is_valid_user_id(user_id: &str) -> bool {
    user_id.len() == HYPHENATED_UUID_LEN && Uuid::parse_str(user_id).is_ok()
}

/// Rules shared by both schema variants of an order.
pub(crate) fn cluster_request_violations(
    user_id: &str,
    cluster_name: &str,
    has_monitoring: bool,
    images_storage: i32,
    monitoring_storage: i32,
) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if user_id.is_empty() {
        violations.push(FieldViolation::UserIdRequired);
    } else if !is_valid_user_id(user_id) {
        violations.push(FieldViolation::InvalidUserId(user_id.to_string()));
    }

    if cluster_name.is_empty() {
        violations.push(FieldViolation::ClusterNameRequired);
    } else if cluster_name.len() > MAX_CLUSTER_NAME_LEN {
        violations.push(FieldViolation::ClusterNameTooLong(cluster_name.len()));
    } else if !is_valid_cluster_name(cluster_name) {
        violations.push(FieldViolation::InvalidClusterName(cluster_name.to_string()));
    }

    if images_storage == 0 {
        violations.push(FieldViolation::ImagesStorageRequired);
    }

    if has_monitoring && monitoring_storage == 0 {
        violations.push(FieldViolation::MonitoringStorageRequired);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_labels_are_valid_cluster_names() {
        let longest = "a".repeat(63);
        for name in ["prod-1", "a", "0", "my-cluster-42", longest.as_str()] {
            assert!(is_valid_cluster_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn non_dns_labels_are_rejected() {
        let too_long = "a".repeat(64);
        for name in [
            "",
            "-prod",
            "prod-",
            "Prod",
            "prod_1",
            "prod.1",
            "prod 1",
            "prödu",
            too_long.as_str(),
        ] {
            assert!(!is_valid_cluster_name(name), "{name} should be invalid");
        }
    }

    #[test]
    fn only_hyphenated_uuids_are_valid_user_ids() {
        assert!(is_valid_user_id("11111111-1111-1111-1111-111111111111"));
        assert!(!is_valid_user_id("11111111111111111111111111111111"));
        assert!(!is_valid_user_id("{11111111-1111-1111-1111-111111111111}"));
        assert!(!is_valid_user_id("not-a-uuid"));
    }

    #[test]
    fn monitoring_storage_only_required_with_monitoring() {
        let user_id = "11111111-1111-1111-1111-111111111111";

        assert!(cluster_request_violations(user_id, "prod-1", false, 10, 0).is_empty());
        assert_eq!(
            cluster_request_violations(user_id, "prod-1", true, 10, 0),
            vec![FieldViolation::MonitoringStorageRequired]
        );
    }

    #[test]
    fn error_message_lists_every_violation() {
        let error = OrderValidationError::check(vec![
            FieldViolation::PaypalIdRequired,
            FieldViolation::ImagesStorageRequired,
        ])
        .unwrap_err();

        assert_eq!(
            error.to_string(),
            "invalid order: paypal_id is required; images_storage is required"
        );
        assert!(OrderValidationError::check(Vec::new()).is_ok());
    }
}
