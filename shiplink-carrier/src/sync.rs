use std::sync::Arc;

use tracing::{debug, info, warn};

use shiplink_core::host::ConfigStore;
use shiplink_core::repository::{CarrierRepository, MappingStore};
use shiplink_core::{RepositoryError, SyncError};
use shiplink_shared::{Carrier, MethodMapping, ShippingMethod};

use crate::pricing::derive_cost;

/// Storefront label given to the backup carrier instead of the aggregator
/// title
pub const BACKUP_CARRIER_LABEL: &str = "Shipping cost";

/// Reconciles aggregator-owned shipping methods with local carrier records
/// and the persistent mapping between the two.
///
/// Each operation runs once per inbound platform event and sequences its
/// writes deliberately: the carrier is persisted before its mapping, and
/// cost tiers are fully replaced rather than patched. There is no
/// multi-write transaction underneath.
pub struct CarrierSyncService {
    carriers: Arc<dyn CarrierRepository>,
    mappings: Arc<dyn MappingStore>,
    config: Arc<dyn ConfigStore>,
}

impl CarrierSyncService {
    pub fn new(
        carriers: Arc<dyn CarrierRepository>,
        mappings: Arc<dyn MappingStore>,
        config: Arc<dyn ConfigStore>,
    ) -> Self {
        Self { carriers, mappings, config }
    }

    /// Activates a shipping method in the storefront: creates a carrier
    /// offered for every available country and payment method, then links
    /// it to the method. The mapping write is only attempted once the
    /// carrier write has succeeded, so a failed add never leaves a
    /// dangling mapping.
    pub async fn add(&self, method: &ShippingMethod) -> Result<(), SyncError> {
        let carrier = self.create_carrier(method).await?;

        let mapping = MethodMapping {
            shipping_method_id: method.id,
            carrier_id: carrier.id,
            is_drop_off: method.is_drop_off,
        };
        self.mappings.save(&mapping).await?;

        info!(shipping_method = method.id, carrier = %carrier.id, "activated shipping method");
        Ok(())
    }

    /// Re-derives the linked carrier from the current method definition.
    /// A missing mapping or carrier means the method was never activated
    /// here (or was removed concurrently) and is skipped without error.
    pub async fn update(&self, method: &ShippingMethod) -> Result<(), SyncError> {
        let Some(mapping) = self.mappings.find_by_shipping_method(method.id).await? else {
            debug!(shipping_method = method.id, "no mapping on update, skipping");
            return Ok(());
        };

        let Some(mut carrier) = self.carriers.find_by_id(mapping.carrier_id).await? else {
            debug!(shipping_method = method.id, "mapped carrier is gone, skipping update");
            return Ok(());
        };

        apply_method(&mut carrier, method)?;
        self.carriers.save(&carrier).await?;
        Ok(())
    }

    /// Deactivates a shipping method. A concurrent edit of the carrier
    /// aborts the whole operation with `Ok(false)` and leaves the mapping
    /// in place, so the link to the still-existing carrier is not lost;
    /// the caller may retry. Returns `Ok(true)` when nothing was there to
    /// remove.
    pub async fn delete(&self, method: &ShippingMethod) -> Result<bool, SyncError> {
        let Some(mapping) = self.mappings.find_by_shipping_method(method.id).await? else {
            debug!(shipping_method = method.id, "no mapping on delete, nothing to remove");
            return Ok(true);
        };

        if self.carriers.find_by_id(mapping.carrier_id).await?.is_some() {
            match self.carriers.delete(mapping.carrier_id).await {
                Ok(()) => {
                    info!(shipping_method = method.id, carrier = %mapping.carrier_id, "removed carrier");
                }
                Err(RepositoryError::Conflict(id)) => {
                    warn!(carrier = %id, "concurrent carrier edit, aborting delete");
                    return Ok(false);
                }
                Err(other) => return Err(other.into()),
            }
        }

        self.mappings.delete(method.id).await?;
        Ok(true)
    }

    /// Creates the fallback carrier used when normal rate lookups fail.
    /// It carries a fixed storefront label, never a drop-off flag, and is
    /// tracked through the configuration slot instead of a mapping.
    pub async fn add_backup(&self, method: &ShippingMethod) -> Result<(), SyncError> {
        let mut backup = method.clone();
        backup.title = BACKUP_CARRIER_LABEL.to_string();
        backup.is_drop_off = false;

        let carrier = self.create_carrier(&backup).await?;
        self.config.set_backup_carrier_id(Some(carrier.id)).await?;

        info!(carrier = %carrier.id, "registered backup carrier");
        Ok(())
    }

    /// Removes the designated backup carrier, applying the same conflict
    /// policy as `delete`: a concurrent edit aborts with `Ok(false)` and
    /// keeps the configuration slot.
    pub async fn delete_backup(&self) -> Result<bool, SyncError> {
        let Some(id) = self.config.backup_carrier_id().await? else {
            debug!("no backup carrier registered, nothing to remove");
            return Ok(true);
        };

        if self.carriers.find_by_id(id).await?.is_some() {
            match self.carriers.delete(id).await {
                Ok(()) => info!(carrier = %id, "removed backup carrier"),
                Err(RepositoryError::Conflict(id)) => {
                    warn!(carrier = %id, "concurrent carrier edit, aborting backup delete");
                    return Ok(false);
                }
                Err(other) => return Err(other.into()),
            }
        }

        self.config.set_backup_carrier_id(None).await?;
        Ok(true)
    }

    async fn create_carrier(&self, method: &ShippingMethod) -> Result<Carrier, SyncError> {
        let countries = self.carriers.find_countries().await?;
        let payment_methods = self.carriers.find_payment_methods().await?;

        let mut carrier = Carrier::new(method.title.clone(), countries, payment_methods);
        apply_method(&mut carrier, method)?;

        self.carriers.save(&carrier).await?;
        Ok(carrier)
    }
}

/// Re-derives the carrier fields owned by the shipping method: name, tax
/// mode and the full cost matrix. Existing tiers never survive.
fn apply_method(carrier: &mut Carrier, method: &ShippingMethod) -> Result<(), SyncError> {
    carrier.name = method.title.clone();
    if let Some(tax_class) = method.tax_class {
        carrier.tax_calculation = tax_class;
    }

    let cost = derive_cost(method)?;
    carrier.set_cost(cost.calculation, cost.tiers);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shiplink_shared::{Country, PaymentMethod, PricingPolicy, ShippingService};
    use shiplink_store::memory::{
        InMemoryCarrierRepository, InMemoryConfigStore, InMemoryMappingStore,
    };
    use uuid::Uuid;

    /// Carrier repository whose deletes always hit an optimistic conflict
    struct ConflictOnDelete {
        inner: InMemoryCarrierRepository,
    }

    #[async_trait]
    impl CarrierRepository for ConflictOnDelete {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Carrier>, RepositoryError> {
            self.inner.find_by_id(id).await
        }

        async fn save(&self, carrier: &Carrier) -> Result<(), RepositoryError> {
            self.inner.save(carrier).await
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            Err(RepositoryError::Conflict(id))
        }

        async fn find_countries(&self) -> Result<Vec<Country>, RepositoryError> {
            self.inner.find_countries().await
        }

        async fn find_payment_methods(&self) -> Result<Vec<PaymentMethod>, RepositoryError> {
            self.inner.find_payment_methods().await
        }
    }

    fn flat_method(id: i64) -> ShippingMethod {
        let mut method = ShippingMethod::new(id, "Express".to_string(), PricingPolicy::Flat);
        method.services = vec![ShippingService { id: 1, base_price: 4.2 }];
        method
    }

    fn conflicted_service() -> (
        CarrierSyncService,
        Arc<ConflictOnDelete>,
        Arc<InMemoryMappingStore>,
        Arc<InMemoryConfigStore>,
    ) {
        let carriers = Arc::new(ConflictOnDelete { inner: InMemoryCarrierRepository::new() });
        let mappings = Arc::new(InMemoryMappingStore::new());
        let config = Arc::new(InMemoryConfigStore::new());
        let service =
            CarrierSyncService::new(carriers.clone(), mappings.clone(), config.clone());
        (service, carriers, mappings, config)
    }

    #[tokio::test]
    async fn test_conflicted_delete_keeps_carrier_and_mapping() {
        let (service, carriers, mappings, _) = conflicted_service();
        let method = flat_method(42);

        service.add(&method).await.unwrap();
        assert!(!service.delete(&method).await.unwrap());

        let mapping = mappings.find_by_shipping_method(42).await.unwrap().unwrap();
        assert!(carriers.find_by_id(mapping.carrier_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_conflicted_backup_delete_keeps_slot() {
        let (service, _, _, config) = conflicted_service();

        service.add_backup(&flat_method(9)).await.unwrap();
        let slot = config.backup_carrier_id().await.unwrap();
        assert!(slot.is_some());

        assert!(!service.delete_backup().await.unwrap());
        assert_eq!(config.backup_carrier_id().await.unwrap(), slot);
    }
}
