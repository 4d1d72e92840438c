use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reclookup::application::lookup::RecordLookup;
use reclookup::config::build_registry;
use reclookup::domain::ports::{RecordStore, RecordStoreBox};
use reclookup::domain::record::TenantId;
use reclookup::domain::schema::KeyBinding;
use reclookup::infrastructure::in_memory::InMemoryRecordStore;
#[cfg(feature = "storage-rocksdb")]
use reclookup::infrastructure::rocksdb::RocksDBStore;
use reclookup::interfaces::csv::record_reader::RecordReader;
use reclookup::interfaces::json::record_writer::RecordWriter;
use reclookup::telemetry;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Record type to look up, e.g. User
    record_type: String,

    /// Natural-key value of the record
    id: String,

    /// CSV file of records to load before the lookup
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Tenant the lookup is scoped to
    #[arg(long, default_value = TenantId::DEFAULT)]
    tenant: String,

    /// JSON file mapping record types to key fields
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Key field override, TYPE=FIELD (repeatable)
    #[arg(long = "key", value_name = "TYPE=FIELD")]
    keys: Vec<KeyBinding>,
}

fn open_store(db_path: Option<&Path>) -> Result<RecordStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => Ok(Box::new(RocksDBStore::open(path)?)),
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
            );
            Ok(Box::new(InMemoryRecordStore::new()))
        }
        None => Ok(Box::new(InMemoryRecordStore::new())),
    }
}

async fn seed_store(store: &dyn RecordStore, path: &Path) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    let mut loaded = 0usize;
    for record in RecordReader::new(file).records() {
        match record {
            Ok(record) => match store.insert(record).await {
                Ok(()) => loaded += 1,
                Err(e) => warn!("Error storing record: {}", e),
            },
            Err(e) => warn!("Error reading record: {}", e),
        }
    }
    info!(loaded, path = %path.display(), "seeded store");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let registry = build_registry(cli.schema.as_deref(), &cli.keys)?;
    let store = open_store(cli.db_path.as_deref())?;
    if let Some(seed) = &cli.seed {
        seed_store(store.as_ref(), seed).await?;
    }

    let lookup = RecordLookup::new(store, registry).for_tenant(TenantId::new(cli.tenant)?);
    let record = lookup.find_by_id(&cli.record_type, &cli.id).await?;

    let stdout = io::stdout();
    let mut writer = RecordWriter::new(stdout.lock());
    writer.write_record(&record)?;

    Ok(())
}
