//! Input and output formats at the edge of the crate.

pub mod csv;
pub mod json;
