//! Application layer.
//!
//! Holds `RecordLookup`, which turns a record type and identifier into a single
//! record by querying whichever store it was handed.

pub mod lookup;
