use serde::{Deserialize, Serialize};

use crate::models::method::ShippingMethod;

/// Lifecycle notifications emitted by the aggregator configuration layer
/// when a merchant changes shipping methods in the admin UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingMethodEvent {
    Created(ShippingMethod),
    Updated(ShippingMethod),
    Deleted(ShippingMethod),
    BackupEnabled(ShippingMethod),
    BackupDisabled,
}
