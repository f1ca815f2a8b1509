use async_trait::async_trait;
use shiplink_shared::{Carrier, Country, MethodMapping, PaymentMethod};
use uuid::Uuid;

use crate::RepositoryError;

/// Repository trait for local carrier records. `delete` reports an
/// optimistic-concurrency violation as `RepositoryError::Conflict`; the
/// country and payment reads are reference data consulted only when a
/// carrier is created.
#[async_trait]
pub trait CarrierRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Carrier>, RepositoryError>;

    /// Insert-or-update by carrier id
    async fn save(&self, carrier: &Carrier) -> Result<(), RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn find_countries(&self) -> Result<Vec<Country>, RepositoryError>;

    async fn find_payment_methods(&self) -> Result<Vec<PaymentMethod>, RepositoryError>;
}

/// Repository trait for the shipping-method to carrier join records.
/// Keyed by `shipping_method_id` (at most one mapping per method).
#[async_trait]
pub trait MappingStore: Send + Sync {
    async fn find_by_shipping_method(
        &self,
        shipping_method_id: i64,
    ) -> Result<Option<MethodMapping>, RepositoryError>;

    async fn save(&self, mapping: &MethodMapping) -> Result<(), RepositoryError>;

    async fn delete(&self, shipping_method_id: i64) -> Result<(), RepositoryError>;
}
