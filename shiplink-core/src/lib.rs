pub mod host;
pub mod repository;

use uuid::Uuid;

/// Failure of a single persistence-port call
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Carrier {0} was modified concurrently")]
    Conflict(Uuid),
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Failure of a single sync operation. Nothing here is fatal to the host;
/// the platform event handler decides how to surface it.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Shipping method {0} has no services to derive a price from")]
    NoPriceSource(i64),
    #[error("Unrecognized dispatcher event: {0}")]
    UnknownRoute(String),
}

pub type SyncResult<T> = Result<T, SyncError>;
