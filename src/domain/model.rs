use serde::{Deserialize, Serialize};

/// Status label the carrier reports once a delivery is complete. The loop's
/// termination condition is an exact match against this string, so if the
/// carrier ever renames the status the monitor will keep polling.
pub const STATUS_DELIVERED: &str = "配達完了";

/// Placeholder the carrier serves while no delivery slot is scheduled.
pub const DELIVERY_TIME_UNSET: &str = "-";

/// One entry in the shipment's history, in the order the carrier reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEvent {
    pub title: String,
    pub date: String,
    pub name: String,
}

/// Immutable snapshot of carrier-reported state at one poll.
///
/// Two records are equal iff every field matches, including the full
/// `details` sequence in order; the derived `PartialEq` is exactly that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub package_number: String,
    pub status: String,
    pub status_detail: String,
    pub is_finished: bool,
    pub package_type: String,
    pub delivery_time: String,
    pub details: Vec<DeliveryEvent>,
}

impl PackageRecord {
    /// Builds a snapshot, deriving `is_finished` from `status`. The flag is
    /// never carried over from a previous snapshot.
    pub fn new(
        package_number: impl Into<String>,
        status: impl Into<String>,
        status_detail: impl Into<String>,
        package_type: impl Into<String>,
        delivery_time: impl Into<String>,
        details: Vec<DeliveryEvent>,
    ) -> Self {
        let status = status.into();
        let is_finished = status == STATUS_DELIVERED;
        Self {
            package_number: package_number.into(),
            status,
            status_detail: status_detail.into(),
            is_finished,
            package_type: package_type.into(),
            delivery_time: delivery_time.into(),
            details,
        }
    }

    pub fn has_delivery_time(&self) -> bool {
        self.delivery_time != DELIVERY_TIME_UNSET
    }
}
