use std::path::Path;

use async_trait::async_trait;
use uuid::Uuid;

use crate::RepositoryError;

/// Host configuration slot tracking the designated fallback carrier.
/// Reads and writes are not serialized against concurrent sync operations;
/// the host platform does not serialize these calls either.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn backup_carrier_id(&self) -> Result<Option<Uuid>, RepositoryError>;

    async fn set_backup_carrier_id(&self, id: Option<Uuid>) -> Result<(), RepositoryError>;
}

/// Host asset lookup for plugin-bundled files (carrier logos)
pub trait AssetResolver: Send + Sync {
    /// Whether the plugin ships a file at this relative path
    fn asset_exists(&self, path: &Path) -> bool;

    /// Public storefront URL for a plugin asset
    fn to_public_url(&self, path: &Path) -> String;
}
