pub mod events;
pub mod logo;
pub mod pricing;
pub mod routes;
pub mod sync;

pub use events::SyncOutcome;
pub use logo::resolve_logo_path;
pub use pricing::{derive_cost, DerivedCost};
pub use sync::{CarrierSyncService, BACKUP_CARRIER_LABEL};
