use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shiplink_core::host::ConfigStore;
use shiplink_core::repository::{CarrierRepository, MappingStore};
use shiplink_core::RepositoryError;
use shiplink_shared::{Carrier, Country, MethodMapping, PaymentMethod};

/// In-memory carrier store mirroring the host dispatch tables. Reference
/// data (countries, payment methods) is fixed at construction time.
#[derive(Default)]
pub struct InMemoryCarrierRepository {
    carriers: RwLock<HashMap<Uuid, Carrier>>,
    countries: Vec<Country>,
    payment_methods: Vec<PaymentMethod>,
}

impl InMemoryCarrierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_data(
        countries: Vec<Country>,
        payment_methods: Vec<PaymentMethod>,
    ) -> Self {
        Self { carriers: RwLock::new(HashMap::new()), countries, payment_methods }
    }

    pub async fn count(&self) -> usize {
        self.carriers.read().await.len()
    }
}

#[async_trait]
impl CarrierRepository for InMemoryCarrierRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Carrier>, RepositoryError> {
        Ok(self.carriers.read().await.get(&id).cloned())
    }

    async fn save(&self, carrier: &Carrier) -> Result<(), RepositoryError> {
        debug!(carrier = %carrier.id, "saving carrier");
        self.carriers.write().await.insert(carrier.id, carrier.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.carriers.write().await.remove(&id);
        Ok(())
    }

    async fn find_countries(&self) -> Result<Vec<Country>, RepositoryError> {
        Ok(self.countries.clone())
    }

    async fn find_payment_methods(&self) -> Result<Vec<PaymentMethod>, RepositoryError> {
        Ok(self.payment_methods.clone())
    }
}

/// In-memory mapping table keyed by shipping method id, which keeps the
/// one-mapping-per-method invariant by construction.
#[derive(Default)]
pub struct InMemoryMappingStore {
    mappings: RwLock<HashMap<i64, MethodMapping>>,
}

impl InMemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.mappings.read().await.len()
    }
}

#[async_trait]
impl MappingStore for InMemoryMappingStore {
    async fn find_by_shipping_method(
        &self,
        shipping_method_id: i64,
    ) -> Result<Option<MethodMapping>, RepositoryError> {
        Ok(self.mappings.read().await.get(&shipping_method_id).cloned())
    }

    async fn save(&self, mapping: &MethodMapping) -> Result<(), RepositoryError> {
        debug!(shipping_method = mapping.shipping_method_id, "saving mapping");
        self.mappings
            .write()
            .await
            .insert(mapping.shipping_method_id, mapping.clone());
        Ok(())
    }

    async fn delete(&self, shipping_method_id: i64) -> Result<(), RepositoryError> {
        self.mappings.write().await.remove(&shipping_method_id);
        Ok(())
    }
}

/// Single-slot configuration store for the backup carrier id
#[derive(Default)]
pub struct InMemoryConfigStore {
    backup_carrier_id: RwLock<Option<Uuid>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn backup_carrier_id(&self) -> Result<Option<Uuid>, RepositoryError> {
        Ok(*self.backup_carrier_id.read().await)
    }

    async fn set_backup_carrier_id(&self, id: Option<Uuid>) -> Result<(), RepositoryError> {
        *self.backup_carrier_id.write().await = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_carrier_crud() {
        let repo = InMemoryCarrierRepository::new();
        let carrier = Carrier::new("GLS".to_string(), Vec::new(), Vec::new());

        repo.save(&carrier).await.unwrap();
        assert_eq!(repo.count().await, 1);

        let found = repo.find_by_id(carrier.id).await.unwrap().unwrap();
        assert_eq!(found.name, "GLS");

        repo.delete(carrier.id).await.unwrap();
        assert!(repo.find_by_id(carrier.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mapping_is_unique_per_method() {
        let store = InMemoryMappingStore::new();
        let first = MethodMapping {
            shipping_method_id: 5,
            carrier_id: Uuid::new_v4(),
            is_drop_off: false,
        };
        let second = MethodMapping { carrier_id: Uuid::new_v4(), ..first.clone() };

        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        assert_eq!(store.count().await, 1);
        let found = store.find_by_shipping_method(5).await.unwrap().unwrap();
        assert_eq!(found.carrier_id, second.carrier_id);
    }

    #[tokio::test]
    async fn test_backup_slot() {
        let config = InMemoryConfigStore::new();
        assert!(config.backup_carrier_id().await.unwrap().is_none());

        let id = Uuid::new_v4();
        config.set_backup_carrier_id(Some(id)).await.unwrap();
        assert_eq!(config.backup_carrier_id().await.unwrap(), Some(id));

        config.set_backup_carrier_id(None).await.unwrap();
        assert!(config.backup_carrier_id().await.unwrap().is_none());
    }
}
