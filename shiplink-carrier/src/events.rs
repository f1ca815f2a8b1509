use serde::{Deserialize, Serialize};

use shiplink_core::SyncError;
use shiplink_shared::ShippingMethodEvent;

use crate::sync::CarrierSyncService;

/// What a lifecycle event did to local state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncOutcome {
    /// Carrier state now matches the aggregator definition
    Applied,
    /// Carrier and mapping removed, or nothing was there to remove
    Removed,
    /// A concurrent carrier edit aborted the removal; safe to retry
    Conflicted,
}

impl CarrierSyncService {
    /// Route one aggregator lifecycle event to the matching sync
    /// operation. This is the seam the host platform's subscriber wiring
    /// calls into; the dispatcher itself lives host-side.
    pub async fn handle_event(
        &self,
        event: ShippingMethodEvent,
    ) -> Result<SyncOutcome, SyncError> {
        match event {
            ShippingMethodEvent::Created(method) => {
                self.add(&method).await?;
                Ok(SyncOutcome::Applied)
            }
            ShippingMethodEvent::Updated(method) => {
                self.update(&method).await?;
                Ok(SyncOutcome::Applied)
            }
            ShippingMethodEvent::Deleted(method) => Ok(if self.delete(&method).await? {
                SyncOutcome::Removed
            } else {
                SyncOutcome::Conflicted
            }),
            ShippingMethodEvent::BackupEnabled(method) => {
                self.add_backup(&method).await?;
                Ok(SyncOutcome::Applied)
            }
            ShippingMethodEvent::BackupDisabled => Ok(if self.delete_backup().await? {
                SyncOutcome::Removed
            } else {
                SyncOutcome::Conflicted
            }),
        }
    }
}
