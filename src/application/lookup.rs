use crate::domain::ports::{RecordStore, RecordStoreBox};
use crate::domain::record::{Filter, Record, RecordId, RecordType, TenantId};
use crate::domain::schema::KeyRegistry;
use crate::error::{LookupError, Result};
use std::sync::Arc;
use tracing::debug;

/// Resolves a record type plus natural-key value to exactly one record.
///
/// `RecordLookup` owns a handle to the store it reads from and the tenant it
/// reads as. Nothing is looked up through global state: a caller that needs
/// another tenant asks for a new handle with [`RecordLookup::for_tenant`].
#[derive(Clone)]
pub struct RecordLookup {
    store: Arc<dyn RecordStore>,
    registry: Arc<KeyRegistry>,
    tenant: TenantId,
}

impl RecordLookup {
    /// Creates a lookup bound to the default tenant.
    ///
    /// # Arguments
    ///
    /// * `store` - The store records are read from.
    /// * `registry` - Key fields per record type.
    pub fn new(store: RecordStoreBox, registry: KeyRegistry) -> Self {
        Self {
            store: Arc::from(store),
            registry: Arc::new(registry),
            tenant: TenantId::default(),
        }
    }

    /// Returns a handle over the same store and registry, scoped to `tenant`.
    pub fn for_tenant(&self, tenant: TenantId) -> Self {
        Self {
            store: Arc::clone(&self.store),
            registry: Arc::clone(&self.registry),
            tenant,
        }
    }

    /// The tenant every query through this handle is scoped to.
    pub fn tenant(&self) -> &TenantId {
        &self.tenant
    }

    /// Key fields this handle resolves identifiers against.
    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// Looks a record up by its natural key.
    ///
    /// Surrounding whitespace in `record_type` is ignored, as it is when
    /// seeding from CSV. Fails with `InvalidIdentifier` on a blank identifier,
    /// `UnknownRecordType` if no key field is registered for `record_type`,
    /// and otherwise with whatever [`RecordLookup::find_one`] reports.
    pub async fn find_by_id(&self, record_type: &str, identifier: &str) -> Result<Record> {
        let id = RecordId::new(identifier)?;
        let record_type = RecordType::new(record_type.trim())?;
        let key_field = self
            .registry
            .key_field(&record_type)
            .ok_or_else(|| LookupError::UnknownRecordType(record_type.to_string()))?;

        self.find_one(&record_type, Filter::equals(key_field, id.as_str()))
            .await
    }

    /// Returns the single record matching `filter`.
    pub async fn find_one(&self, record_type: &RecordType, filter: Filter) -> Result<Record> {
        let mut matches = self.store.query(&self.tenant, record_type, &filter).await?;
        debug!(
            tenant = %self.tenant,
            record_type = %record_type,
            filter = %filter,
            matches = matches.len(),
            "record lookup"
        );

        match matches.len() {
            0 => Err(LookupError::NotFound {
                record_type: record_type.to_string(),
                field: filter.field,
                value: filter.value,
            }),
            1 => Ok(matches.remove(0)),
            count => Err(LookupError::MultipleMatches {
                record_type: record_type.to_string(),
                field: filter.field,
                value: filter.value,
                count,
            }),
        }
    }
}
