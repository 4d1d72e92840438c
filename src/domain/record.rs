use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

macro_rules! string_tag {
    ($(#[$meta:meta])* $name:ident, $on_empty:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, LookupError> {
                let value = value.into();
                if value.trim().is_empty() {
                    Err(($on_empty)(value))
                } else {
                    Ok(Self(value))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = LookupError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = LookupError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> Self {
                tag.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_tag!(
    /// Names a kind of record, e.g. `User` or `PaymentTransactions`.
    RecordType,
    |_| LookupError::ValidationError("Record type must not be empty".to_string())
);

string_tag!(
    /// The natural-key value of a record. Only non-emptiness is checked here;
    /// any further format rules belong to whoever owns the data.
    RecordId,
    LookupError::InvalidIdentifier
);

string_tag!(
    /// The tenant a record belongs to. Every query is scoped to exactly one.
    TenantId,
    |_| LookupError::ValidationError("Tenant must not be empty".to_string())
);

impl TenantId {
    pub const DEFAULT: &'static str = "default";
}

impl Default for TenantId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// An equality filter on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

impl Filter {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

/// A record as handed back by a store.
///
/// `key_field` names the natural key (`user_id`, `project_id`, ...) and `id`
/// holds its value. Everything else lives in `attributes` and is passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub tenant: TenantId,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub key_field: String,
    pub id: RecordId,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl Record {
    pub fn new(
        tenant: TenantId,
        record_type: RecordType,
        key_field: impl Into<String>,
        id: RecordId,
    ) -> Self {
        Self {
            tenant,
            record_type,
            key_field: key_field.into(),
            id,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// True when the key field or a string attribute equals the filter value.
    pub fn matches(&self, filter: &Filter) -> bool {
        if filter.field == self.key_field {
            return self.id.as_str() == filter.value;
        }
        matches!(
            self.attributes.get(&filter.field),
            Some(Value::String(s)) if *s == filter.value
        )
    }
}
