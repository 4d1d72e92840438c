//! Assembles the key registry from built-in defaults, an optional JSON schema
//! file and `--key` overrides, applied in that order.

use crate::domain::record::RecordType;
use crate::domain::schema::{KeyBinding, KeyRegistry};
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Reads a schema document of the form `{"RecordType": "key_field", ...}`.
pub fn read_schema<R: Read>(source: R) -> Result<BTreeMap<String, String>> {
    Ok(serde_json::from_reader(source)?)
}

pub fn build_registry(schema: Option<&Path>, bindings: &[KeyBinding]) -> Result<KeyRegistry> {
    let mut registry = KeyRegistry::new();

    if let Some(path) = schema {
        let file = File::open(path)?;
        for (ty, field) in read_schema(BufReader::new(file))? {
            registry.register(RecordType::new(ty)?, field)?;
        }
        debug!(path = %path.display(), "loaded key schema");
    }

    for binding in bindings {
        registry.register(binding.record_type.clone(), binding.key_field.clone())?;
    }

    Ok(registry)
}
