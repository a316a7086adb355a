//! Datastore Module
//!
//! Generic table-oriented read/insert capability standing in for the
//! hosted database collaborator. Application code only depends on
//! select-by-equality and insert-row.

mod memory;

pub use memory::{seed_demo, Row, TableStore};
