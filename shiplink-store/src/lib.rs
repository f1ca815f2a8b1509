pub mod assets;
pub mod memory;

pub use assets::DiskAssetResolver;
pub use memory::{InMemoryCarrierRepository, InMemoryConfigStore, InMemoryMappingStore};
