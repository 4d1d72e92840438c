//! Store adapters implementing [`crate::domain::ports::RecordStore`].

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
