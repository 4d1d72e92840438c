use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum LookupError {
    #[error("{record_type} matching {field}={value} not found")]
    #[diagnostic(code(reclookup::not_found))]
    NotFound {
        record_type: String,
        field: String,
        value: String,
    },
    #[error("{count} {record_type} records match {field}={value}, expected exactly one")]
    #[diagnostic(
        code(reclookup::multiple_matches),
        help("the store holds duplicate rows for a key that should be unique")
    )]
    MultipleMatches {
        record_type: String,
        field: String,
        value: String,
        count: usize,
    },
    #[error("Invalid identifier: {0:?}")]
    #[diagnostic(code(reclookup::invalid_identifier))]
    InvalidIdentifier(String),
    #[error("Unknown record type: {0}")]
    #[diagnostic(
        code(reclookup::unknown_record_type),
        help("register its key field with --key TYPE=FIELD or a --schema file")
    )]
    UnknownRecordType(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDBError(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, LookupError>;
