//! Domain types and the store port. Nothing in here knows about a concrete
//! backend.

pub mod ports;
pub mod record;
pub mod schema;
