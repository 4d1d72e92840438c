use super::record::RecordType;
use crate::error::{LookupError, Result};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Natural-key fields known without any configuration.
pub const DEFAULT_KEYS: &[(&str, &str)] = &[
    ("User", "user_id"),
    ("PaymentTransactions", "payment_transaction_id"),
    ("Project", "project_id"),
];

/// Maps each record type to the field that holds its natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRegistry {
    keys: BTreeMap<RecordType, String>,
}

impl Default for KeyRegistry {
    fn default() -> Self {
        let keys = DEFAULT_KEYS
            .iter()
            .filter_map(|(ty, field)| {
                RecordType::new(*ty)
                    .ok()
                    .map(|ty| (ty, field.to_string()))
            })
            .collect();
        Self { keys }
    }
}

impl KeyRegistry {
    /// Creates a registry holding the built-in `DEFAULT_KEYS`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no types at all.
    pub fn empty() -> Self {
        Self {
            keys: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) the key field for `record_type`.
    pub fn register(&mut self, record_type: RecordType, key_field: impl Into<String>) -> Result<()> {
        let key_field = key_field.into();
        if key_field.trim().is_empty() {
            return Err(LookupError::ValidationError(format!(
                "Key field for {} must not be empty",
                record_type
            )));
        }
        self.keys.insert(record_type, key_field);
        Ok(())
    }

    /// Returns the key field registered for `record_type`, if any.
    pub fn key_field(&self, record_type: &RecordType) -> Option<&str> {
        self.keys.get(record_type).map(String::as_str)
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no record type is registered.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A `TYPE=FIELD` pair as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub record_type: RecordType,
    pub key_field: String,
}

impl FromStr for KeyBinding {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self> {
        let (ty, field) = s.split_once('=').ok_or_else(|| {
            LookupError::ValidationError(format!("Expected TYPE=FIELD, got {:?}", s))
        })?;
        let field = field.trim();
        if field.is_empty() {
            return Err(LookupError::ValidationError(format!(
                "Missing key field in {:?}",
                s
            )));
        }
        Ok(Self {
            record_type: RecordType::new(ty.trim())?,
            key_field: field.to_string(),
        })
    }
}
