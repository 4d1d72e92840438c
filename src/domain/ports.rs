use super::record::{Filter, Record, RecordType, TenantId};
use crate::error::Result;
use async_trait::async_trait;

/// The persistence boundary the lookup shim queries through.
///
/// Implementations return every record that matches; deciding what more than
/// one match means is left to the caller.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn query(
        &self,
        tenant: &TenantId,
        record_type: &RecordType,
        filter: &Filter,
    ) -> Result<Vec<Record>>;
    async fn insert(&self, record: Record) -> Result<()>;
    async fn all(&self, tenant: &TenantId, record_type: &RecordType) -> Result<Vec<Record>>;
}

pub type RecordStoreBox = Box<dyn RecordStore>;
