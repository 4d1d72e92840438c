use crate::domain::record::{Record, RecordId, RecordType, TenantId};
use crate::error::{LookupError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

/// One CSV row: `tenant, type, key, id, attributes`.
#[derive(Debug, Deserialize)]
struct SeedRow {
    #[serde(default)]
    tenant: String,
    #[serde(rename = "type")]
    record_type: String,
    key: String,
    id: String,
    #[serde(default)]
    attributes: String,
}

impl SeedRow {
    fn into_record(self) -> Result<Record> {
        let tenant = if self.tenant.is_empty() {
            TenantId::default()
        } else {
            TenantId::new(self.tenant)?
        };
        if self.key.is_empty() {
            return Err(LookupError::ValidationError(
                "Key field must not be empty".to_string(),
            ));
        }
        let attributes = if self.attributes.is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&self.attributes)? {
                Value::Object(map) => map,
                other => {
                    return Err(LookupError::ValidationError(format!(
                        "Attributes must be a JSON object, got {}",
                        other
                    )));
                }
            }
        };

        let mut record = Record::new(
            tenant,
            RecordType::new(self.record_type)?,
            self.key,
            RecordId::new(self.id)?,
        );
        record.attributes = attributes;
        Ok(record)
    }
}

/// Reads seed records from a CSV source.
///
/// Whitespace around fields is trimmed and short rows are accepted, so the
/// `attributes` column may be left off entirely.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one result per row. A bad row does not end the stream.
    pub fn records(self) -> impl Iterator<Item = Result<Record>> {
        self.reader
            .into_deserialize::<SeedRow>()
            .map(|row| row.map_err(LookupError::from).and_then(SeedRow::into_record))
    }
}
