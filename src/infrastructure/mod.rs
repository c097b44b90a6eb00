//! Storage adapters implementing [`crate::domain::ports::CatalogStore`].

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
