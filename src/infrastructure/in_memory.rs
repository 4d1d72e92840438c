use crate::domain::ports::RecordStore;
use crate::domain::record::{Filter, Record, RecordType, TenantId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Table = Vec<Record>;

/// A thread-safe in-memory record store.
///
/// Rows are grouped into one table per `(tenant, record type)`. `insert`
/// appends and never de-duplicates, the same as a table without a unique
/// index, so duplicate keys surface to the lookup as multiple matches.
#[derive(Default, Clone)]
pub struct InMemoryRecordStore {
    tables: Arc<RwLock<HashMap<(TenantId, RecordType), Table>>>,
}

impl InMemoryRecordStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn query(
        &self,
        tenant: &TenantId,
        record_type: &RecordType,
        filter: &Filter,
    ) -> Result<Vec<Record>> {
        let tables = self.tables.read().await;
        let key = (tenant.clone(), record_type.clone());
        Ok(tables
            .get(&key)
            .map(|rows| rows.iter().filter(|r| r.matches(filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, record: Record) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .entry((record.tenant.clone(), record.record_type.clone()))
            .or_default()
            .push(record);
        Ok(())
    }

    async fn all(&self, tenant: &TenantId, record_type: &RecordType) -> Result<Vec<Record>> {
        let tables = self.tables.read().await;
        let key = (tenant.clone(), record_type.clone());
        Ok(tables.get(&key).cloned().unwrap_or_default())
    }
}
