use crate::domain::ports::RecordStore;
use crate::domain::record::{Filter, Record, RecordType, TenantId};
use crate::error::{LookupError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Direction, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding every record, keyed by tenant, type and id.
pub const CF_RECORDS: &str = "records";

const SEPARATOR: u8 = 0x1F;

/// A persistent record store backed by RocksDB.
///
/// Records live in a single column family under the key
/// `tenant 0x1F type 0x1F id`, so a second insert with the same key
/// overwrites the first and the backend itself keeps keys unique.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_records = ColumnFamilyDescriptor::new(CF_RECORDS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_records])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn records_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_RECORDS).ok_or_else(|| {
            LookupError::InternalError(Box::new(std::io::Error::other(
                "Records column family not found",
            )))
        })
    }

    /// Reads every record stored under a `(tenant, type)` prefix.
    fn scan(&self, tenant: &TenantId, record_type: &RecordType) -> Result<Vec<Record>> {
        let cf = self.records_cf()?;
        let prefix = table_prefix(tenant, record_type);

        let mut records = Vec::new();
        let iter = self
            .db
            .iterator_cf(cf, IteratorMode::From(&prefix, Direction::Forward));
        for item in iter {
            let (key, value) = item?;
            if !key.starts_with(&prefix) {
                break;
            }
            records.push(serde_json::from_slice(&value)?);
        }
        Ok(records)
    }
}

fn table_prefix(tenant: &TenantId, record_type: &RecordType) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(tenant.as_str().len() + record_type.as_str().len() + 2);
    prefix.extend_from_slice(tenant.as_str().as_bytes());
    prefix.push(SEPARATOR);
    prefix.extend_from_slice(record_type.as_str().as_bytes());
    prefix.push(SEPARATOR);
    prefix
}

fn record_key(record: &Record) -> Result<Vec<u8>> {
    let parts = [
        record.tenant.as_str(),
        record.record_type.as_str(),
        record.id.as_str(),
    ];
    if parts.iter().any(|p| p.as_bytes().contains(&SEPARATOR)) {
        return Err(LookupError::ValidationError(
            "Tenant, type and id must not contain the 0x1F separator".to_string(),
        ));
    }
    let mut key = table_prefix(&record.tenant, &record.record_type);
    key.extend_from_slice(record.id.as_str().as_bytes());
    Ok(key)
}

#[async_trait]
impl RecordStore for RocksDBStore {
    async fn query(
        &self,
        tenant: &TenantId,
        record_type: &RecordType,
        filter: &Filter,
    ) -> Result<Vec<Record>> {
        let mut records = self.scan(tenant, record_type)?;
        records.retain(|r| r.matches(filter));
        Ok(records)
    }

    async fn insert(&self, record: Record) -> Result<()> {
        let cf = self.records_cf()?;
        let key = record_key(&record)?;
        let value = serde_json::to_vec(&record)?;
        self.db.put_cf(cf, key, value)?;
        Ok(())
    }

    async fn all(&self, tenant: &TenantId, record_type: &RecordType) -> Result<Vec<Record>> {
        self.scan(tenant, record_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordId;
    use tempfile::tempdir;

    fn record(tenant: &str, ty: &str, key: &str, id: &str) -> Record {
        Record::new(
            TenantId::new(tenant).unwrap(),
            RecordType::new(ty).unwrap(),
            key,
            RecordId::new(id).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).expect("Failed to open RocksDB");
        assert!(store.db.cf_handle(CF_RECORDS).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_query() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).unwrap();

        let pmt = record(
            "transwarranty-uat",
            "PaymentTransactions",
            "payment_transaction_id",
            "test-transaction-id-1211145",
        )
        .with_attribute("status", "settled");
        store.insert(pmt.clone()).await.unwrap();
        store
            .insert(record("transwarranty-uat", "Payment", "payment_id", "p-1"))
            .await
            .unwrap();

        let tenant = TenantId::new("transwarranty-uat").unwrap();
        let ty = RecordType::new("PaymentTransactions").unwrap();
        let found = store
            .query(
                &tenant,
                &ty,
                &Filter::equals("payment_transaction_id", "test-transaction-id-1211145"),
            )
            .await
            .unwrap();
        assert_eq!(found, vec![pmt]);

        // "Payment" is a prefix of "PaymentTransactions" but a different table
        let payments = store
            .all(&tenant, &RecordType::new("Payment").unwrap())
            .await
            .unwrap();
        assert_eq!(payments.len(), 1);

        assert!(
            store
                .query(&TenantId::default(), &ty, &Filter::equals("payment_transaction_id", "x"))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_rocksdb_insert_overwrites_same_key() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).unwrap();

        store
            .insert(record("default", "User", "user_id", "u-1").with_attribute("v", 1))
            .await
            .unwrap();
        store
            .insert(record("default", "User", "user_id", "u-1").with_attribute("v", 2))
            .await
            .unwrap();

        let all = store
            .all(&TenantId::default(), &RecordType::new("User").unwrap())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].attributes["v"], 2);
    }

    #[tokio::test]
    async fn test_rocksdb_rejects_separator_in_key() {
        let dir = tempdir().unwrap();
        let store = RocksDBStore::open(dir.path()).unwrap();

        let result = store
            .insert(record("default", "User", "user_id", "bad\u{1f}id"))
            .await;
        assert!(matches!(result, Err(LookupError::ValidationError(_))));
    }
}
